use std::collections::BTreeSet;

use xkcd_finder::core::errors::CoreError;
use xkcd_finder::core::item::Item;
use xkcd_finder::index::memory_repo::{MemoryItemStore, MemoryStoreSnapshot};
use xkcd_finder::index::sql::{to_sql_limit, SqlTables};
use xkcd_finder::index::ItemStore;

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[tokio::test]
async fn save_normalizes_keywords() {
    let store = MemoryItemStore::new();

    store
        .save(&Item {
            id: 1,
            image_url: "a.png".to_string(),
            keywords: set(&[" run ", "run", "", "   ", "jump"]),
        })
        .await
        .expect("저장");

    let items = store.list_items().await.expect("목록");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].keywords, set(&["jump", "run"]));
}

#[tokio::test]
async fn resaving_updates_image_and_accumulates_mappings() {
    let store = MemoryItemStore::new();

    store.save(&Item::new(1, "old.png", ["old"])).await.expect("저장");
    store.save(&Item::new(1, "new.png", ["new"])).await.expect("재저장");

    let items = store.list_items().await.expect("목록");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].image_url, "new.png");
    assert_eq!(items[0].keywords, set(&["new", "old"]));
}

#[tokio::test]
async fn keywords_are_shared_and_never_pruned() {
    let store = MemoryItemStore::new()
        .with_item(Item::new(1, "a.png", ["run", "jump"]))
        .with_item(Item::new(2, "b.png", ["run"]));

    let snapshot = store.snapshot().expect("스냅샷");

    assert_eq!(snapshot.keywords, set(&["jump", "run"]));
    assert_eq!(snapshot.mappings.len(), 3);
}

#[tokio::test]
async fn existing_ids_reflect_saved_items() {
    let store = MemoryItemStore::new()
        .with_item(Item::new(4, "d.png", ["x"]))
        .with_item(Item::new(2, "b.png", Vec::<String>::new()));

    let mut ids = store.existing_ids().await.expect("ID 조회").into_iter().collect::<Vec<_>>();
    ids.sort_unstable();

    assert_eq!(ids, vec![2, 4]);
}

#[tokio::test]
async fn injected_save_failure_leaves_no_partial_rows() {
    let store = MemoryItemStore::new().with_failing_save(9);

    let result = store.save(&Item::new(9, "i.png", ["run"])).await;

    assert!(matches!(result, Err(CoreError::Persistence(_))));
    assert_eq!(store.snapshot().expect("스냅샷"), MemoryStoreSnapshot::default());
}

#[test]
fn sql_tables_reject_unsafe_identifiers() {
    assert!(matches!(
        SqlTables::new("comic; DROP TABLE x", "keyword", "mapping"),
        Err(CoreError::InvalidConfig(_))
    ));
    assert!(matches!(
        SqlTables::new("comic", "", "mapping"),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn ranked_query_orders_by_match_count_then_id() {
    let tables = SqlTables::new("comic", "keyword", "comic_keyword_mapping").expect("테이블");

    let sql = tables.top_by_keywords();

    assert!(sql.contains("COUNT(DISTINCT k.id)"));
    assert!(sql.contains("ORDER BY ranked.matched DESC, i.id ASC"));
    assert!(sql.contains("JOIN comic i"));
    assert!(sql.contains("LIMIT $2"));
}

#[test]
fn schema_statements_cover_all_three_tables() {
    let tables = SqlTables::new("items", "words", "item_words").expect("테이블");

    let statements = tables.schema_statements();

    assert_eq!(statements.len(), 3);
    assert!(statements[0].contains("CREATE TABLE IF NOT EXISTS items"));
    assert!(statements[1].contains("keyword TEXT NOT NULL UNIQUE"));
    assert!(statements[2].contains("REFERENCES items(id)"));
    assert!(statements[2].contains("REFERENCES words(id)"));
}

#[test]
fn item_upsert_updates_image_on_conflict() {
    let tables = SqlTables::new("comic", "keyword", "mapping").expect("테이블");

    let sql = tables.upsert_item();

    assert!(sql.contains("ON CONFLICT (id) DO UPDATE SET image_url = EXCLUDED.image_url"));
}

#[test]
fn sql_limit_saturates_instead_of_wrapping() {
    assert_eq!(to_sql_limit(5), 5);
    assert_eq!(to_sql_limit(0), 0);
    assert_eq!(to_sql_limit(i64::MAX as usize), i64::MAX);
    assert_eq!(to_sql_limit(usize::MAX), i64::MAX);
}

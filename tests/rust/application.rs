use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use xkcd_finder::api::application::Application;
use xkcd_finder::catalog::memory::MemoryCatalog;
use xkcd_finder::core::config::AppConfigPayload;
use xkcd_finder::index::memory_repo::MemoryItemStore;

const CONFIG: &str = r#"{
    "postgres": { "dsn": "postgres://localhost/xkcd" },
    "catalog": { "base_url": "https://xkcd.com" },
    "ingestion": { "workers": 2, "language": "en" },
    "search": { "language": "en", "default_limit": 5 }
}"#;

#[tokio::test]
async fn ingest_then_search_end_to_end() {
    let config = AppConfigPayload::from_json_str(CONFIG).expect("설정");
    let catalog = Arc::new(
        MemoryCatalog::new()
            .with_item(1, "dogs.png", "Running dogs bark loudly at the mailman")
            .with_item(2, "cats.png", "Sleeping cats ignore the running dogs")
            .with_item(3, "birds.png", "Birds sing in the morning"),
    );
    let store = Arc::new(MemoryItemStore::new());
    let application = Application::from_parts(&config, catalog, store.clone());

    let report = application
        .ingest(CancellationToken::new())
        .await
        .expect("적재");
    assert_eq!(report.saved_count(), 3);

    let items = application
        .search("running dog", None)
        .await
        .expect("검색");
    let ids = items.iter().map(|item| item.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2]);

    let limited = application.search("dogs", Some(1)).await.expect("검색");
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].image_url, "dogs.png");
}

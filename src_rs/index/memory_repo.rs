// 목적:
// - 메모리 기반 아이템 저장소 대역(test double)을 제공한다.
//
// 설명:
// - PostgreSQL 저장소와 같은 의미(upsert, 매핑 누적, 순위 규칙)를 단일 잠금 아래에서 재현한다.
// - 부트스트랩 조회 실패, 특정 ID 저장 실패를 주입할 수 있다.
// - 순위 조회 호출 수를 기록한다.
//
// 참조:
// - src_rs/index/mod.rs
// - src_rs/index/sql.rs

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::item::{normalize_keywords, Item, ItemId};
use crate::index::ItemStore;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStoreSnapshot {
    pub items: BTreeMap<ItemId, String>,
    pub keywords: BTreeSet<String>,
    pub mappings: BTreeSet<(ItemId, String)>,
}

#[derive(Debug, Default)]
pub struct MemoryItemStore {
    state: Mutex<MemoryStoreSnapshot>,
    failing_save_ids: HashSet<ItemId>,
    fail_existing_ids: bool,
    query_calls: AtomicUsize,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 아이템을 직접 채운다. save와 같은 규칙을 따른다.
    pub fn with_item(self, item: Item) -> Self {
        if let Ok(mut state) = self.state.lock() {
            apply_save(&mut state, &item);
        }
        self
    }

    pub fn with_failing_save(mut self, id: ItemId) -> Self {
        self.failing_save_ids.insert(id);
        self
    }

    pub fn with_failing_existing_ids(mut self) -> Self {
        self.fail_existing_ids = true;
        self
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> CoreResult<MemoryStoreSnapshot> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, MemoryStoreSnapshot>> {
        self.state
            .lock()
            .map_err(|_| {
                CoreError::Persistence("메모리 저장소 잠금을 획득할 수 없습니다".to_string())
            })
    }
}

fn apply_save(state: &mut MemoryStoreSnapshot, item: &Item) {
    state.items.insert(item.id, item.image_url.clone());
    for keyword in normalize_keywords(&item.keywords) {
        state.keywords.insert(keyword.clone());
        state.mappings.insert((item.id, keyword));
    }
}

fn keywords_of(state: &MemoryStoreSnapshot, id: ItemId) -> BTreeSet<String> {
    state
        .mappings
        .range((id, String::new())..)
        .take_while(|(item_id, _)| *item_id == id)
        .map(|(_, keyword)| keyword.clone())
        .collect()
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn existing_ids(&self) -> CoreResult<HashSet<ItemId>> {
        if self.fail_existing_ids {
            return Err(CoreError::Persistence(
                "메모리 저장소 ID 조회 실패 주입".to_string(),
            ));
        }
        Ok(self.lock()?.items.keys().copied().collect())
    }

    async fn save(&self, item: &Item) -> CoreResult<()> {
        if self.failing_save_ids.contains(&item.id) {
            return Err(CoreError::Persistence(format!(
                "메모리 저장소 저장 실패 주입: id={}",
                item.id
            )));
        }
        let mut state = self.lock()?;
        apply_save(&mut state, item);
        Ok(())
    }

    async fn top_by_keywords(
        &self,
        keywords: &BTreeSet<String>,
        limit: usize,
    ) -> CoreResult<Vec<Item>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.lock()?;

        let mut ranked = state
            .items
            .iter()
            .filter_map(|(id, image_url)| {
                let own = keywords_of(&state, *id);
                let matched = own.intersection(keywords).count();
                (matched > 0).then(|| (matched, *id, image_url.clone(), own))
            })
            .collect::<Vec<_>>();

        ranked.sort_by(|left, right| right.0.cmp(&left.0).then_with(|| left.1.cmp(&right.1)));

        Ok(ranked
            .into_iter()
            .take(limit)
            .map(|(_, id, image_url, keywords)| Item {
                id,
                image_url,
                keywords,
            })
            .collect())
    }

    async fn list_items(&self) -> CoreResult<Vec<Item>> {
        let state = self.lock()?;
        Ok(state
            .items
            .iter()
            .map(|(id, image_url)| Item {
                id: *id,
                image_url: image_url.clone(),
                keywords: keywords_of(&state, *id),
            })
            .collect())
    }
}

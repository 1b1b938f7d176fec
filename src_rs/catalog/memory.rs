// 목적:
// - 메모리 기반 원격 카탈로그 대역(test double)을 제공한다.
//
// 설명:
// - 고정 페이로드, 실패 주입, 조회 지연, 조회 기록/최대 동시 조회 수 측정을 지원한다.
//
// 참조:
// - src_rs/catalog/mod.rs

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::catalog::{RawItem, RemoteCatalog};
use crate::core::errors::{CoreError, CoreResult};
use crate::core::item::ItemId;

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    items: HashMap<ItemId, RawItem>,
    count: i64,
    failing_ids: HashSet<ItemId>,
    fail_count: bool,
    latency: Option<Duration>,
    fetch_log: Mutex<Vec<ItemId>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 아이템을 추가한다. 카탈로그 수는 가장 큰 번호로 갱신된다.
    pub fn with_item(mut self, id: ItemId, image_url: &str, text: &str) -> Self {
        self.items.insert(
            id,
            RawItem {
                id,
                image_url: image_url.to_string(),
                text: text.to_string(),
            },
        );
        self.count = self.count.max(id);
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_failing_id(mut self, id: ItemId) -> Self {
        self.failing_ids.insert(id);
        self
    }

    pub fn with_failing_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// 지금까지 fetch가 호출된 번호 목록(호출 순서)이다.
    pub fn fetch_log(&self) -> Vec<ItemId> {
        self.fetch_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteCatalog for MemoryCatalog {
    async fn fetch(&self, id: ItemId) -> CoreResult<RawItem> {
        if let Ok(mut log) = self.fetch_log.lock() {
            log.push(id);
        }

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_ids.contains(&id) {
            return Err(CoreError::Transport(format!(
                "메모리 카탈로그 실패 주입: id={}",
                id
            )));
        }

        self.items.get(&id).cloned().ok_or(CoreError::NotFound(id))
    }

    async fn count(&self) -> CoreResult<i64> {
        if self.fail_count {
            return Err(CoreError::Transport(
                "메모리 카탈로그 count 실패 주입".to_string(),
            ));
        }
        Ok(self.count)
    }
}

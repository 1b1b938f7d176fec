// 목적:
// - 로컬 저장소를 원격 카탈로그의 현재 번호 범위 [1..N]과 맞추는 적재 파이프라인을 실행한다.
//
// 설명:
// - N과 기존 ID 집합을 한 번 읽고(실패 시 전체 중단), 누락 ID = {1..N} \ 기존 을 계산한다.
// - 단일 생산자가 작은 버퍼의 큐로 누락 ID를 흘려보내고, W개의 워커가 독립적으로 꺼내 처리한다.
// - 아이템 단위 실패(fetch/생성/저장)는 건너뛰고 결과 목록에 사유를 남긴다. 재시도는 없다.
// - 취소 토큰이 걸리면 새 ID 배분을 멈추고, 큐에 남은 ID는 Cancelled로 기록한다.
//
// 디자인 패턴:
// - 생산자-소비자(Producer-Consumer) + 고정 크기 워커 풀(Worker Pool).
//
// 참조:
// - src_rs/catalog/mod.rs
// - src_rs/index/mod.rs
// - src_rs/core/item_generator.rs

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::catalog::RemoteCatalog;
use crate::core::config::IngestionConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::item::ItemId;
use crate::core::item_generator::ItemGenerator;
use crate::index::ItemStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", content = "message", rename_all = "snake_case")]
pub enum SkipReason {
    Fetch(String),
    Generate(String),
    Persist(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ItemStatus {
    Saved,
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub id: ItemId,
    pub status: ItemStatus,
}

impl ItemOutcome {
    fn saved(id: ItemId) -> Self {
        Self {
            id,
            status: ItemStatus::Saved,
        }
    }

    fn skipped(id: ItemId, reason: SkipReason) -> Self {
        Self {
            id,
            status: ItemStatus::Skipped(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionReport {
    pub remote_count: i64,
    pub existing_count: usize,
    /// 누락 ID마다 정확히 하나씩, ID 오름차순이다.
    pub outcomes: Vec<ItemOutcome>,
}

impl IngestionReport {
    pub fn saved_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == ItemStatus::Saved)
            .count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status != ItemStatus::Saved)
    }
}

/// 원격 번호 1..=`max_id` 중 `existing`에 없는 번호를 오름차순으로 반환한다.
pub fn find_missing_ids(existing: &HashSet<ItemId>, max_id: i64) -> Vec<ItemId> {
    (1..=max_id).filter(|id| !existing.contains(id)).collect()
}

pub struct IngestionPipeline {
    catalog: Arc<dyn RemoteCatalog>,
    store: Arc<dyn ItemStore>,
    generator: Arc<ItemGenerator>,
    config: IngestionConfigPayload,
}

impl IngestionPipeline {
    pub fn new(
        catalog: Arc<dyn RemoteCatalog>,
        store: Arc<dyn ItemStore>,
        generator: Arc<ItemGenerator>,
        config: IngestionConfigPayload,
    ) -> Self {
        Self {
            catalog,
            store,
            generator,
            config,
        }
    }

    /// 적재를 실행한다. 부트스트랩 조회 실패만 오류로 반환하고 아이템 단위 실패는 보고서에 담는다.
    pub async fn execute(&self, cancel: CancellationToken) -> CoreResult<IngestionReport> {
        self.config.validate()?;

        let remote_count = self.catalog.count().await?;
        let existing = self.store.existing_ids().await?;
        let missing = find_missing_ids(&existing, remote_count);

        tracing::info!(
            remote_count,
            existing = existing.len(),
            missing = missing.len(),
            workers = self.config.workers,
            "적재 시작"
        );

        let (sender, receiver) = mpsc::channel::<ItemId>(self.config.queue_capacity);
        let receiver = Arc::new(Mutex::new(receiver));

        let mut workers = JoinSet::new();
        for worker_id in 0..self.config.workers {
            let worker = Worker {
                worker_id,
                catalog: self.catalog.clone(),
                store: self.store.clone(),
                generator: self.generator.clone(),
                language: self.config.language.clone(),
                cancel: cancel.clone(),
            };
            let receiver = receiver.clone();
            workers.spawn(async move { worker.run(receiver).await });
        }

        let producer = tokio::spawn(produce(missing, sender, cancel.clone()));

        let mut outcomes = Vec::new();
        while let Some(joined) = workers.join_next().await {
            let worker_outcomes = joined.map_err(|error| {
                CoreError::Runtime(format!("적재 워커 조인 실패: {}", error))
            })?;
            outcomes.extend(worker_outcomes);
        }

        let undispatched = producer
            .await
            .map_err(|error| CoreError::Runtime(format!("적재 생산자 조인 실패: {}", error)))?;
        outcomes.extend(
            undispatched
                .into_iter()
                .map(|id| ItemOutcome::skipped(id, SkipReason::Cancelled)),
        );
        outcomes.sort_by_key(|outcome| outcome.id);

        let report = IngestionReport {
            remote_count,
            existing_count: existing.len(),
            outcomes,
        };

        tracing::info!(
            saved = report.saved_count(),
            skipped = report.skipped().count(),
            cancelled = cancel.is_cancelled(),
            "적재 완료"
        );

        Ok(report)
    }
}

/// 누락 ID를 큐로 흘려보낸다. 취소되면 멈추고 보내지 못한 ID를 반환한다.
async fn produce(
    missing: Vec<ItemId>,
    sender: mpsc::Sender<ItemId>,
    cancel: CancellationToken,
) -> Vec<ItemId> {
    let mut pending = missing.into_iter();

    while let Some(id) = pending.next() {
        let sent = tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            result = sender.send(id) => result.is_ok(),
        };

        if !sent {
            return std::iter::once(id).chain(pending).collect();
        }
    }

    Vec::new()
}

struct Worker {
    worker_id: usize,
    catalog: Arc<dyn RemoteCatalog>,
    store: Arc<dyn ItemStore>,
    generator: Arc<ItemGenerator>,
    language: String,
    cancel: CancellationToken,
}

impl Worker {
    async fn run(self, receiver: Arc<Mutex<mpsc::Receiver<ItemId>>>) -> Vec<ItemOutcome> {
        let mut outcomes = Vec::new();

        loop {
            let next = { receiver.lock().await.recv().await };
            let Some(id) = next else {
                break;
            };

            if self.cancel.is_cancelled() {
                outcomes.push(ItemOutcome::skipped(id, SkipReason::Cancelled));
                continue;
            }

            let outcome = self.process(id).await;
            if let ItemStatus::Skipped(reason) = &outcome.status {
                tracing::warn!(worker = self.worker_id, id, ?reason, "아이템 건너뜀");
            } else {
                tracing::debug!(worker = self.worker_id, id, "아이템 저장");
            }
            outcomes.push(outcome);
        }

        outcomes
    }

    async fn process(&self, id: ItemId) -> ItemOutcome {
        let raw = match self.catalog.fetch(id).await {
            Ok(raw) => raw,
            Err(error) => return ItemOutcome::skipped(id, SkipReason::Fetch(error.to_string())),
        };

        let item = match self
            .generator
            .new_item(id, &raw.image_url, &raw.text, &self.language)
        {
            Ok(item) => item,
            Err(error) => {
                return ItemOutcome::skipped(id, SkipReason::Generate(error.to_string()))
            }
        };

        match self.store.save(&item).await {
            Ok(()) => ItemOutcome::saved(id),
            Err(error) => ItemOutcome::skipped(id, SkipReason::Persist(error.to_string())),
        }
    }
}

// 목적:
// - 아이템 저장소 계층 모듈과 기능 경계를 선언한다.
//
// 설명:
// - 파이프라인은 ItemStore 트레이트에만 의존한다.
// - save는 아이템/키워드/매핑을 한 번에 반영하는 원자적 upsert여야 한다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/sql.rs
// - src_rs/index/postgres_repo.rs
// - src_rs/index/memory_repo.rs

use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};

use crate::core::errors::CoreResult;
use crate::core::item::{Item, ItemId};

pub mod memory_repo;
pub mod postgres_repo;
pub mod sql;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// 이미 저장된 아이템 ID 집합을 조회한다.
    async fn existing_ids(&self) -> CoreResult<HashSet<ItemId>>;

    /// 아이템과 키워드 매핑을 원자적으로 upsert 한다. 기존 매핑은 지우지 않는다.
    async fn save(&self, item: &Item) -> CoreResult<()>;

    /// 질의 키워드와 겹치는 수가 많은 순(동률은 ID 오름차순)으로 최대 `limit`개를 조회한다.
    async fn top_by_keywords(
        &self,
        keywords: &BTreeSet<String>,
        limit: usize,
    ) -> CoreResult<Vec<Item>>;

    /// 저장된 전체 아이템을 ID 오름차순으로 조회한다.
    async fn list_items(&self) -> CoreResult<Vec<Item>>;
}

// 목적:
// - 번호가 매겨진 원격 카탈로그 계층 모듈과 기능 경계를 선언한다.
//
// 설명:
// - 적재 파이프라인은 RemoteCatalog 트레이트에만 의존한다.
// - HTTP 구현과 메모리 대역 구현을 분리한다.
//
// 디자인 패턴:
// - 어댑터(Adapter) + 의존성 주입(Dependency Injection).
//
// 참조:
// - src_rs/catalog/xkcd_http.rs
// - src_rs/catalog/memory.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::errors::CoreResult;
use crate::core::item::ItemId;

pub mod memory;
pub mod xkcd_http;

/// 원격 카탈로그가 돌려주는 가공 전 아이템이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub id: ItemId,
    pub image_url: String,
    pub text: String,
}

#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// 번호로 원본 아이템을 조회한다. 없으면 `CoreError::NotFound`다.
    async fn fetch(&self, id: ItemId) -> CoreResult<RawItem>;

    /// 현재 카탈로그의 아이템 수(가장 큰 번호)를 조회한다.
    async fn count(&self) -> CoreResult<i64>;
}

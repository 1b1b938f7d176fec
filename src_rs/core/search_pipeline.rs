// 목적:
// - 키워드 겹침 기반 검색 파이프라인을 실행한다.
//
// 설명:
// - 질의 텍스트 -> 스테밍(언어 코드가 비면 감지) -> 저장소 순위 조회 순서로 처리한다.
// - 키워드가 비면 저장소를 호출하지 않고 빈 결과를 반환한다.
// - 질의 언어 감지 실패는 호출자에게 그대로 전달한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline).
//
// 참조:
// - src_rs/text/stemming.rs
// - src_rs/index/mod.rs

use std::sync::Arc;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::item::Item;
use crate::index::ItemStore;
use crate::text::stemming::KeywordStemmer;

pub struct SearchPipeline {
    store: Arc<dyn ItemStore>,
    stemmer: Arc<dyn KeywordStemmer>,
}

impl SearchPipeline {
    pub fn new(store: Arc<dyn ItemStore>, stemmer: Arc<dyn KeywordStemmer>) -> Self {
        Self { store, stemmer }
    }

    /// 질의와 키워드가 가장 많이 겹치는 아이템을 최대 `limit`개 반환한다.
    pub async fn execute(
        &self,
        query: &str,
        limit: usize,
        language_code: &str,
    ) -> CoreResult<Vec<Item>> {
        let keywords = if language_code.trim().is_empty() {
            self.stemmer.stem_with_detection(query)?
        } else {
            self.stemmer.stem(query, language_code)
        };

        tracing::debug!(keywords = keywords.len(), limit, "검색 질의 스테밍 완료");

        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        if limit == 0 {
            return Err(CoreError::InvalidInput(
                "limit은 1 이상이어야 합니다".to_string(),
            ));
        }

        self.store.top_by_keywords(&keywords, limit).await
    }
}

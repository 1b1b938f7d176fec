// 목적:
// - 원격 카탈로그 원본과 스테머 결과를 합쳐 저장용 아이템을 만든다.
//
// 설명:
// - 언어 코드가 주어지면 해당 규칙으로 스테밍하고, 비어 있으면 언어를 감지한다.
// - 감지 실패는 생성 실패로 전파한다.
//
// 참조:
// - src_rs/text/stemming.rs
// - src_rs/core/ingestion_pipeline.rs

use std::sync::Arc;

use crate::core::errors::CoreResult;
use crate::core::item::{Item, ItemId};
use crate::text::stemming::KeywordStemmer;

pub struct ItemGenerator {
    stemmer: Arc<dyn KeywordStemmer>,
}

impl ItemGenerator {
    pub fn new(stemmer: Arc<dyn KeywordStemmer>) -> Self {
        Self { stemmer }
    }

    /// 아이템을 생성한다. `language_code`가 비어 있으면 언어 감지를 거친다.
    pub fn new_item(
        &self,
        id: ItemId,
        image_url: &str,
        text: &str,
        language_code: &str,
    ) -> CoreResult<Item> {
        let keywords = if language_code.trim().is_empty() {
            self.stemmer.stem_with_detection(text)?
        } else {
            self.stemmer.stem(text, language_code)
        };

        Ok(Item::new(id, image_url, keywords))
    }
}

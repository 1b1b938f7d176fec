// 목적:
// - 저장 대상 아이템 엔티티와 키워드 정규화 규칙을 정의한다.
//
// 설명:
// - 아이템 ID는 원격 카탈로그의 번호를 그대로 사용하는 자연 키다.
// - 키워드는 공백 제거 후 비어 있지 않은 값만 중복 없이 유지한다.
//
// 참조:
// - src_rs/core/item_generator.rs
// - src_rs/index/mod.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub image_url: String,
    pub keywords: BTreeSet<String>,
}

impl Item {
    pub fn new<I, S>(id: ItemId, image_url: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id,
            image_url: image_url.into(),
            keywords: normalize_keywords(keywords),
        }
    }
}

/// 키워드를 trim 하고 빈 값을 제외한 뒤 중복 없는 집합으로 만든다.
pub fn normalize_keywords<I, S>(keywords: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|keyword| keyword.as_ref().trim().to_string())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

// 목적:
// - 자유 텍스트에서 언어 인식 키워드 집합을 추출한다.
//
// 설명:
// - 공백 분할 -> 토큰 정규화 -> 불용어 제거 -> snowball 스테밍 -> 중복 제거 순서로 처리한다.
// - 스테밍 결과가 비면 원래 토큰을 그대로 사용한다.
// - 언어 코드가 비었거나 알 수 없으면 영어 규칙을 사용한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 정적 조회 테이블(Static Lookup Table).
//
// 참조:
// - src_rs/text/language.rs
// - src_rs/text/stopwords.rs

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::core::errors::{CoreError, CoreResult};
use crate::text::language::LanguageDetector;
use crate::text::stopwords::StopwordIndex;

/// 텍스트를 키워드(어간) 집합으로 변환하는 기능 경계다.
pub trait KeywordStemmer: Send + Sync {
    fn stem(&self, text: &str, language_code: &str) -> BTreeSet<String>;
    fn stem_with_detection(&self, text: &str) -> CoreResult<BTreeSet<String>>;
}

pub struct SnowballStemmer {
    detector: Arc<dyn LanguageDetector>,
    stopwords: StopwordIndex,
}

impl SnowballStemmer {
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self {
            detector,
            stopwords: StopwordIndex::new(),
        }
    }
}

impl KeywordStemmer for SnowballStemmer {
    fn stem(&self, text: &str, language_code: &str) -> BTreeSet<String> {
        let stemmer = Stemmer::create(algorithm_for(language_code));

        text.split_whitespace()
            .filter_map(normalize_token)
            .filter(|token| !self.stopwords.is_stopword(language_code, token))
            .map(|token| {
                let stemmed = stemmer.stem(&token).into_owned();
                if stemmed.trim().is_empty() {
                    token
                } else {
                    stemmed
                }
            })
            .collect()
    }

    fn stem_with_detection(&self, text: &str) -> CoreResult<BTreeSet<String>> {
        if text.trim().is_empty() {
            return Ok(BTreeSet::new());
        }

        let language_code = self.detector.detect(text)?;
        Ok(self.stem(text, &language_code))
    }
}

/// 언어 코드를 snowball 알고리즘으로 대응시킨다. 알 수 없는 코드는 영어다.
pub fn algorithm_for(language_code: &str) -> Algorithm {
    match language_code.trim().to_ascii_lowercase().as_str() {
        "ar" => Algorithm::Arabic,
        "da" => Algorithm::Danish,
        "nl" => Algorithm::Dutch,
        "fi" => Algorithm::Finnish,
        "fr" => Algorithm::French,
        "de" => Algorithm::German,
        "el" => Algorithm::Greek,
        "hu" => Algorithm::Hungarian,
        "it" => Algorithm::Italian,
        "no" | "nb" | "nn" => Algorithm::Norwegian,
        "pt" => Algorithm::Portuguese,
        "ro" => Algorithm::Romanian,
        "ru" => Algorithm::Russian,
        "es" => Algorithm::Spanish,
        "sv" => Algorithm::Swedish,
        "ta" => Algorithm::Tamil,
        "tr" => Algorithm::Turkish,
        _ => Algorithm::English,
    }
}

/// 소문자화 후 앞뒤의 문자/숫자가 아닌 기호를 제거한다. 결과가 비면 None이다.
fn normalize_token(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim_matches(|ch: char| !ch.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 미리 정해진 결과를 돌려주는 대역(test double) 구현이다.
///
/// 등록되지 않은 텍스트는 소문자 공백 분할 결과를 그대로 키워드로 사용한다.
#[derive(Debug, Clone, Default)]
pub struct StaticStemmer {
    fixed: HashMap<String, BTreeSet<String>>,
    fail_detection: bool,
}

impl StaticStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result<I, S>(mut self, text: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fixed
            .insert(text.into(), keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn failing_detection(mut self) -> Self {
        self.fail_detection = true;
        self
    }
}

impl KeywordStemmer for StaticStemmer {
    fn stem(&self, text: &str, _language_code: &str) -> BTreeSet<String> {
        if let Some(keywords) = self.fixed.get(text) {
            return keywords.clone();
        }
        text.split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    fn stem_with_detection(&self, text: &str) -> CoreResult<BTreeSet<String>> {
        if text.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
        if self.fail_detection {
            return Err(CoreError::DetectionFailed(
                "고정 스테머가 감지 실패로 설정되었습니다".to_string(),
            ));
        }
        Ok(self.stem(text, ""))
    }
}

use rstest::rstest;
use std::collections::BTreeSet;
use std::sync::Arc;

use xkcd_finder::core::errors::CoreError;
use xkcd_finder::text::language::{FixedLanguageDetector, LanguageDetector, WhatlangDetector};
use xkcd_finder::text::stemming::{KeywordStemmer, SnowballStemmer};
use xkcd_finder::text::stopwords::{stopwords_for, StopwordIndex};

fn english_stemmer() -> SnowballStemmer {
    SnowballStemmer::new(Arc::new(FixedLanguageDetector::returning("en")))
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[rstest]
#[case("The running runners ran")]
#[case("cats cat CAT cats! cat.")]
#[case("Black Hat explains the bug to Cueball")]
#[case("")]
fn stem_is_deterministic(#[case] text: &str) {
    let stemmer = english_stemmer();

    let first = stemmer.stem(text, "en");
    let second = stemmer.stem(text, "en");

    assert_eq!(first, second);
}

#[test]
fn stem_removes_stopwords_and_deduplicates() {
    let stemmer = english_stemmer();

    let keywords = stemmer.stem("The running runners ran", "en");

    assert!(!keywords.contains("the"));
    assert!(keywords.len() <= 3);
    assert!(keywords.contains("run"));
}

#[test]
fn repeated_forms_collapse_to_one_stem() {
    let stemmer = english_stemmer();

    let keywords = stemmer.stem("cats cat CAT cats! cat.", "en");

    assert_eq!(keywords, set(&["cat"]));
}

#[test]
fn punctuation_is_trimmed_and_empty_tokens_dropped() {
    let stemmer = english_stemmer();

    let keywords = stemmer.stem("Hello, world! -- ...", "en");

    assert_eq!(keywords, set(&["hello", "world"]));
}

#[rstest]
#[case("zzz")]
#[case("42")]
#[case("xkcd")]
fn unknown_tokens_round_trip_unchanged(#[case] token: &str) {
    let stemmer = english_stemmer();

    assert_eq!(stemmer.stem(token, "en"), set(&[token]));
}

#[rstest]
#[case("")]
#[case("xx")]
#[case("klingon")]
fn unrecognized_language_falls_back_to_english(#[case] language: &str) {
    let stemmer = english_stemmer();
    let text = "The running runners jumped";

    assert_eq!(stemmer.stem(text, language), stemmer.stem(text, "en"));
}

#[test]
fn language_specific_stopwords_are_removed() {
    let stemmer = english_stemmer();

    let keywords = stemmer.stem("и кошки", "ru");

    assert!(!keywords.contains("и"));
    assert_eq!(keywords.len(), 1);
}

#[test]
fn stem_with_detection_on_empty_text_never_fails() {
    let stemmer = SnowballStemmer::new(Arc::new(FixedLanguageDetector::failing()));

    let keywords = stemmer.stem_with_detection("   ").expect("빈 텍스트는 실패하지 않아야 한다");

    assert!(keywords.is_empty());
}

#[test]
fn stem_with_detection_propagates_detection_failure() {
    let stemmer = SnowballStemmer::new(Arc::new(FixedLanguageDetector::failing()));

    let result = stemmer.stem_with_detection("some text");

    assert!(matches!(result, Err(CoreError::DetectionFailed(_))));
}

#[test]
fn stem_with_detection_uses_detected_language() {
    let stemmer = SnowballStemmer::new(Arc::new(FixedLanguageDetector::returning("en")));

    let detected = stemmer
        .stem_with_detection("The running runners ran")
        .expect("감지가 성공해야 한다");

    assert_eq!(detected, stemmer.stem("The running runners ran", "en"));
}

#[test]
fn whatlang_detects_english_prose() {
    let detector = WhatlangDetector::default();

    let code = detector
        .detect("The quick brown fox jumps over the lazy dog and then keeps running through the forest for the rest of the day")
        .expect("영어 문장은 감지되어야 한다");

    assert_eq!(code, "en");
}

#[test]
fn whatlang_fails_on_text_without_letters() {
    let detector = WhatlangDetector::default();

    assert!(matches!(
        detector.detect("12345 !!!"),
        Err(CoreError::DetectionFailed(_))
    ));
}

#[rstest]
#[case("en", "the", true)]
#[case("EN", "the", true)]
#[case("de", "und", true)]
#[case("de", "the", false)]
#[case("unknown", "the", true)]
#[case("en", "comic", false)]
fn stopword_index_lookup(#[case] language: &str, #[case] token: &str, #[case] expected: bool) {
    let index = StopwordIndex::new();

    assert_eq!(index.is_stopword(language, token), expected);
}

#[test]
fn stopword_lists_fall_back_to_english() {
    assert_eq!(stopwords_for("zz"), stopwords_for("en"));
    assert_ne!(stopwords_for("fr"), stopwords_for("en"));
}

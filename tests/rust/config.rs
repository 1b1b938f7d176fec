use rstest::rstest;

use xkcd_finder::core::config::AppConfigPayload;
use xkcd_finder::core::errors::CoreError;
use xkcd_finder::text::language::DEFAULT_MIN_CONFIDENCE;

const MINIMAL: &str = r#"{
    "postgres": { "dsn": "postgres://localhost/xkcd" },
    "catalog": { "base_url": "https://xkcd.com" }
}"#;

#[test]
fn minimal_config_fills_defaults() {
    let config = AppConfigPayload::from_json_str(MINIMAL).expect("설정");

    assert_eq!(config.postgres.item_table, "comic");
    assert_eq!(config.postgres.keyword_table, "keyword");
    assert_eq!(config.postgres.mapping_table, "comic_keyword_mapping");
    assert_eq!(config.catalog.info_path, "info.0.json");
    assert_eq!(config.ingestion.queue_capacity, 1);
    assert!(config.ingestion.workers >= 1);
    assert!(config.ingestion.language.is_empty());
    assert_eq!(config.search.default_limit, 10);
    assert_eq!(config.text.min_confidence, DEFAULT_MIN_CONFIDENCE);
}

#[test]
fn full_config_is_read_verbatim() {
    let raw = r#"{
        "postgres": {
            "dsn": "postgres://db/xkcd",
            "item_table": "items",
            "keyword_table": "words",
            "mapping_table": "item_words",
            "pool_min": 2,
            "pool_max": 16,
            "connect_timeout_ms": 100,
            "statement_timeout_ms": 200
        },
        "catalog": { "base_url": "http://mirror", "info_path": "meta.json", "timeout_ms": 300 },
        "ingestion": { "workers": 8, "queue_capacity": 4, "language": "en" },
        "search": { "language": "en", "default_limit": 3 },
        "text": { "min_confidence": 0.8 }
    }"#;

    let config = AppConfigPayload::from_json_str(raw).expect("설정");

    assert_eq!(config.postgres.pool_max, 16);
    assert_eq!(config.catalog.info_path, "meta.json");
    assert_eq!(config.ingestion.workers, 8);
    assert_eq!(config.ingestion.language, "en");
    assert_eq!(config.search.default_limit, 3);
    assert_eq!(config.text.min_confidence, 0.8);
}

#[rstest]
#[case(r#"{"postgres":{"dsn":""},"catalog":{"base_url":"https://xkcd.com"}}"#)]
#[case(r#"{"postgres":{"dsn":"pg","item_table":"bad-name"},"catalog":{"base_url":"https://xkcd.com"}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":" "}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":"x","timeout_ms":0}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":"x"},"ingestion":{"workers":0}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":"x"},"ingestion":{"workers":2,"queue_capacity":0}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":"x"},"search":{"default_limit":0}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":"x"},"text":{"min_confidence":1.5}}"#)]
#[case(r#"{"postgres":{"dsn":"pg"},"catalog":{"base_url":"x"},"text":{"min_confidence":-0.1}}"#)]
fn invalid_values_are_rejected(#[case] raw: &str) {
    assert!(matches!(
        AppConfigPayload::from_json_str(raw),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    assert!(matches!(
        AppConfigPayload::from_json_str("{ not json"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn missing_file_is_a_config_error() {
    assert!(matches!(
        AppConfigPayload::from_path("/nonexistent/xkcd-finder.json"),
        Err(CoreError::InvalidConfig(_))
    ));
}

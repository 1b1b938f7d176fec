// 목적:
// - 실행 설정 페이로드와 검증 규칙을 정의한다.
//
// 설명:
// - JSON 설정 파일을 serde로 역직렬화하고, 잘못된 값은 필드명을 포함한 InvalidConfig로 거부한다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/api/application.rs
// - src_rs/index/sql.rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::errors::{CoreError, CoreResult};
use crate::index::sql::validate_identifier;
use crate::text::language::DEFAULT_MIN_CONFIDENCE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfigPayload {
    pub dsn: String,
    #[serde(default = "default_item_table")]
    pub item_table: String,
    #[serde(default = "default_keyword_table")]
    pub keyword_table: String,
    #[serde(default = "default_mapping_table")]
    pub mapping_table: String,
    #[serde(default = "default_pool_min")]
    pub pool_min: u32,
    #[serde(default = "default_pool_max")]
    pub pool_max: u32,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_statement_timeout_ms")]
    pub statement_timeout_ms: u64,
}

impl PostgresConfigPayload {
    pub fn validate(&self) -> CoreResult<()> {
        if self.dsn.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "postgres.dsn은 비어 있을 수 없습니다".to_string(),
            ));
        }
        validate_identifier(&self.item_table, "postgres.item_table")?;
        validate_identifier(&self.keyword_table, "postgres.keyword_table")?;
        validate_identifier(&self.mapping_table, "postgres.mapping_table")?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfigPayload {
    pub base_url: String,
    #[serde(default = "default_info_path")]
    pub info_path: String,
    #[serde(default = "default_catalog_timeout_ms")]
    pub timeout_ms: u64,
}

impl CatalogConfigPayload {
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "catalog.base_url은 비어 있을 수 없습니다".to_string(),
            ));
        }
        if self.info_path.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "catalog.info_path는 비어 있을 수 없습니다".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "catalog.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfigPayload {
    pub workers: usize,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    /// 비어 있으면 아이템마다 언어를 감지한다.
    #[serde(default)]
    pub language: String,
}

impl IngestionConfigPayload {
    pub fn validate(&self) -> CoreResult<()> {
        if self.workers == 0 {
            return Err(CoreError::InvalidConfig(
                "ingestion.workers는 1 이상이어야 합니다".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(CoreError::InvalidConfig(
                "ingestion.queue_capacity는 1 이상이어야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for IngestionConfigPayload {
    fn default() -> Self {
        Self {
            workers: 4,
            queue_capacity: default_queue_capacity(),
            language: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfigPayload {
    /// 비어 있으면 질의마다 언어를 감지한다.
    #[serde(default)]
    pub language: String,
    #[serde(default = "default_search_limit")]
    pub default_limit: usize,
}

impl Default for SearchConfigPayload {
    fn default() -> Self {
        Self {
            language: String::new(),
            default_limit: default_search_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfigPayload {
    /// 신뢰 판정이 나지 않은 감지 결과를 받아들이는 최소 신뢰도(0.0 ~ 1.0)다.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

impl TextConfigPayload {
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(CoreError::InvalidConfig(format!(
                "text.min_confidence는 0.0 이상 1.0 이하여야 합니다: {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

impl Default for TextConfigPayload {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigPayload {
    pub postgres: PostgresConfigPayload,
    pub catalog: CatalogConfigPayload,
    #[serde(default)]
    pub ingestion: IngestionConfigPayload,
    #[serde(default)]
    pub search: SearchConfigPayload,
    #[serde(default)]
    pub text: TextConfigPayload,
}

impl AppConfigPayload {
    pub fn from_json_str(raw: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|error| {
            CoreError::Serialization(format!("설정 JSON 파싱 실패: {}", error))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|error| {
            CoreError::InvalidConfig(format!(
                "설정 파일을 읽을 수 없습니다: path={}, error={}",
                path.display(),
                error
            ))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> CoreResult<()> {
        self.postgres.validate()?;
        self.catalog.validate()?;
        self.ingestion.validate()?;
        self.text.validate()?;

        if self.search.default_limit == 0 {
            return Err(CoreError::InvalidConfig(
                "search.default_limit은 1 이상이어야 합니다".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_item_table() -> String {
    "comic".to_string()
}

fn default_keyword_table() -> String {
    "keyword".to_string()
}

fn default_mapping_table() -> String {
    "comic_keyword_mapping".to_string()
}

fn default_pool_min() -> u32 {
    1
}

fn default_pool_max() -> u32 {
    8
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_statement_timeout_ms() -> u64 {
    30_000
}

fn default_info_path() -> String {
    "info.0.json".to_string()
}

fn default_catalog_timeout_ms() -> u64 {
    10_000
}

fn default_queue_capacity() -> usize {
    1
}

fn default_search_limit() -> usize {
    10
}

fn default_min_confidence() -> f64 {
    DEFAULT_MIN_CONFIDENCE
}

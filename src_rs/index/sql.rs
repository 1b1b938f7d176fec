// 목적:
// - SQL 관련 공통 유틸리티를 제공한다.
//
// 설명:
// - 동적 테이블명 검증과, 검증된 테이블명으로 구성한 SQL 문장 생성을 담당한다.
// - 값은 항상 바인드 파라미터로 전달하고 테이블명만 문자열로 조합한다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/index/postgres_repo.rs

use crate::core::config::PostgresConfigPayload;
use crate::core::errors::{CoreError, CoreResult};

/// 테이블 식별자의 허용 문자를 검증한다.
pub fn validate_identifier(value: &str, field_name: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidConfig(format!(
            "{}는 비어 있을 수 없습니다",
            field_name
        )));
    }

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    if !valid {
        return Err(CoreError::InvalidConfig(format!(
            "{}에는 영문/숫자/밑줄만 사용할 수 있습니다: {}",
            field_name, value
        )));
    }

    Ok(())
}

/// 결과 개수 제한을 Postgres BIGINT로 변환한다. 범위를 넘으면 i64::MAX로 포화시킨다.
pub fn to_sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// 검증을 통과한 아이템/키워드/매핑 테이블명 묶음이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlTables {
    item: String,
    keyword: String,
    mapping: String,
}

impl SqlTables {
    pub fn new(item: &str, keyword: &str, mapping: &str) -> CoreResult<Self> {
        validate_identifier(item, "postgres.item_table")?;
        validate_identifier(keyword, "postgres.keyword_table")?;
        validate_identifier(mapping, "postgres.mapping_table")?;

        Ok(Self {
            item: item.to_string(),
            keyword: keyword.to_string(),
            mapping: mapping.to_string(),
        })
    }

    pub fn from_config(config: &PostgresConfigPayload) -> CoreResult<Self> {
        Self::new(&config.item_table, &config.keyword_table, &config.mapping_table)
    }

    pub fn schema_statements(&self) -> Vec<String> {
        vec![
            format!(
                "CREATE TABLE IF NOT EXISTS {} (id BIGINT PRIMARY KEY, image_url TEXT NOT NULL)",
                self.item
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {} (id BIGSERIAL PRIMARY KEY, keyword TEXT NOT NULL UNIQUE)",
                self.keyword
            ),
            format!(
                "CREATE TABLE IF NOT EXISTS {mapping} (\
                 item_id BIGINT NOT NULL REFERENCES {item}(id), \
                 keyword_id BIGINT NOT NULL REFERENCES {keyword}(id), \
                 PRIMARY KEY (item_id, keyword_id))",
                mapping = self.mapping,
                item = self.item,
                keyword = self.keyword
            ),
        ]
    }

    pub fn select_item_ids(&self) -> String {
        format!("SELECT id FROM {}", self.item)
    }

    /// $1 = id, $2 = image_url
    pub fn upsert_item(&self) -> String {
        format!(
            "INSERT INTO {} (id, image_url) VALUES ($1, $2) \
             ON CONFLICT (id) DO UPDATE SET image_url = EXCLUDED.image_url",
            self.item
        )
    }

    /// $1 = text[] 키워드
    pub fn insert_keywords(&self) -> String {
        format!(
            "INSERT INTO {} (keyword) SELECT UNNEST($1::text[]) \
             ON CONFLICT (keyword) DO NOTHING",
            self.keyword
        )
    }

    /// $1 = item_id, $2 = text[] 키워드
    pub fn insert_mappings(&self) -> String {
        format!(
            "INSERT INTO {mapping} (item_id, keyword_id) \
             SELECT $1, k.id FROM {keyword} k WHERE k.keyword = ANY($2::text[]) \
             ON CONFLICT DO NOTHING",
            mapping = self.mapping,
            keyword = self.keyword
        )
    }

    /// $1 = text[] 질의 키워드, $2 = limit
    ///
    /// 일치한 서로 다른 키워드 수 내림차순, 같으면 아이템 ID 오름차순이다.
    /// 결과 키워드는 일치분이 아니라 저장된 전체 집합이다.
    pub fn top_by_keywords(&self) -> String {
        format!(
            "SELECT i.id, i.image_url, \
             ARRAY(SELECT k2.keyword FROM {mapping} m2 JOIN {keyword} k2 ON k2.id = m2.keyword_id \
                   WHERE m2.item_id = i.id ORDER BY k2.keyword) AS keywords \
             FROM ( \
                 SELECT m.item_id, COUNT(DISTINCT k.id) AS matched \
                 FROM {mapping} m JOIN {keyword} k ON k.id = m.keyword_id \
                 WHERE k.keyword = ANY($1::text[]) \
                 GROUP BY m.item_id \
             ) ranked \
             JOIN {item} i ON i.id = ranked.item_id \
             ORDER BY ranked.matched DESC, i.id ASC \
             LIMIT $2",
            mapping = self.mapping,
            keyword = self.keyword,
            item = self.item
        )
    }

    pub fn list_items(&self) -> String {
        format!(
            "SELECT i.id, i.image_url, \
             ARRAY(SELECT k.keyword FROM {mapping} m JOIN {keyword} k ON k.id = m.keyword_id \
                   WHERE m.item_id = i.id ORDER BY k.keyword) AS keywords \
             FROM {item} i ORDER BY i.id",
            mapping = self.mapping,
            keyword = self.keyword,
            item = self.item
        )
    }
}

// 목적:
// - PostgreSQL 기반 아이템 저장소를 담당한다.
//
// 설명:
// - 아이템 ID 조회, 트랜잭션 단위 upsert, 키워드 겹침 순위 조회를 제공한다.
// - 테이블명은 실행 시 검증해 SQL 주입 위험을 줄인다.
//
// 디자인 패턴:
// - 저장소 패턴(Repository Pattern).
//
// 참조:
// - src_rs/index/sql.rs
// - src_rs/index/mod.rs

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::collections::{BTreeSet, HashSet};

use crate::core::config::PostgresConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::item::{normalize_keywords, Item, ItemId};
use crate::index::sql::{to_sql_limit, SqlTables};
use crate::index::ItemStore;

pub struct PostgresItemStore {
    pool: PgPool,
    tables: SqlTables,
}

impl PostgresItemStore {
    pub async fn connect(config: &PostgresConfigPayload) -> CoreResult<Self> {
        config.validate()?;
        let tables = SqlTables::from_config(config)?;

        let statement_timeout = format!(
            "SET statement_timeout = {}",
            config.statement_timeout_ms.max(1)
        );
        let pool = PgPoolOptions::new()
            .min_connections(config.pool_min)
            .max_connections(config.pool_max.max(config.pool_min).max(1))
            .acquire_timeout(std::time::Duration::from_millis(
                config.connect_timeout_ms.max(1),
            ))
            .after_connect(move |conn, _meta| {
                let statement = statement_timeout.clone();
                Box::pin(async move {
                    sqlx::query(&statement).execute(conn).await?;
                    Ok(())
                })
            })
            .connect(&config.dsn)
            .await
            .map_err(|error| CoreError::Persistence(format!("Postgres 연결 실패: {}", error)))?;

        Ok(Self::from_pool(pool, tables))
    }

    pub fn from_pool(pool: PgPool, tables: SqlTables) -> Self {
        Self { pool, tables }
    }

    /// 아이템/키워드/매핑 테이블이 없으면 생성한다.
    pub async fn ensure_schema(&self) -> CoreResult<()> {
        for statement in self.tables.schema_statements() {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(|error| CoreError::Persistence(format!("스키마 생성 실패: {}", error)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    async fn existing_ids(&self) -> CoreResult<HashSet<ItemId>> {
        let rows = sqlx::query(&self.tables.select_item_ids())
            .fetch_all(&self.pool)
            .await
            .map_err(|error| CoreError::Persistence(format!("아이템 ID 조회 실패: {}", error)))?;

        rows.into_iter()
            .map(|row| {
                row.try_get::<i64, _>("id")
                    .map_err(|error| {
                        CoreError::Persistence(format!("item.id 파싱 실패: {}", error))
                    })
            })
            .collect()
    }

    async fn save(&self, item: &Item) -> CoreResult<()> {
        let keywords = normalize_keywords(&item.keywords)
            .into_iter()
            .collect::<Vec<_>>();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|error| CoreError::Persistence(format!("트랜잭션 시작 실패: {}", error)))?;

        sqlx::query(&self.tables.upsert_item())
            .bind(item.id)
            .bind(&item.image_url)
            .execute(&mut *tx)
            .await
            .map_err(|error| {
                CoreError::Persistence(format!("아이템 upsert 실패: id={}, {}", item.id, error))
            })?;

        if !keywords.is_empty() {
            sqlx::query(&self.tables.insert_keywords())
                .bind(&keywords)
                .execute(&mut *tx)
                .await
                .map_err(|error| {
                    CoreError::Persistence(format!("키워드 저장 실패: id={}, {}", item.id, error))
                })?;

            sqlx::query(&self.tables.insert_mappings())
                .bind(item.id)
                .bind(&keywords)
                .execute(&mut *tx)
                .await
                .map_err(|error| {
                    CoreError::Persistence(format!("매핑 저장 실패: id={}, {}", item.id, error))
                })?;
        }

        // 실패 경로에서는 tx가 drop되며 롤백된다.
        tx.commit()
            .await
            .map_err(|error| {
                CoreError::Persistence(format!("트랜잭션 커밋 실패: id={}, {}", item.id, error))
            })
    }

    async fn top_by_keywords(
        &self,
        keywords: &BTreeSet<String>,
        limit: usize,
    ) -> CoreResult<Vec<Item>> {
        let keywords = keywords.iter().cloned().collect::<Vec<_>>();

        let rows = sqlx::query(&self.tables.top_by_keywords())
            .bind(&keywords)
            .bind(to_sql_limit(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|error| CoreError::Persistence(format!("키워드 순위 조회 실패: {}", error)))?;

        rows.into_iter().map(map_item_row).collect()
    }

    async fn list_items(&self) -> CoreResult<Vec<Item>> {
        let rows = sqlx::query(&self.tables.list_items())
            .fetch_all(&self.pool)
            .await
            .map_err(|error| CoreError::Persistence(format!("아이템 목록 조회 실패: {}", error)))?;

        rows.into_iter().map(map_item_row).collect()
    }
}

fn map_item_row(row: PgRow) -> CoreResult<Item> {
    let id = row
        .try_get::<i64, _>("id")
        .map_err(|error| CoreError::Persistence(format!("item.id 파싱 실패: {}", error)))?;
    let image_url = row
        .try_get::<String, _>("image_url")
        .map_err(|error| CoreError::Persistence(format!("item.image_url 파싱 실패: {}", error)))?;
    let keywords = row
        .try_get::<Vec<String>, _>("keywords")
        .map_err(|error| CoreError::Persistence(format!("item.keywords 파싱 실패: {}", error)))?;

    Ok(Item::new(id, image_url, keywords))
}

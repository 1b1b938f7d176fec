// 목적:
// - 설정으로부터 적재/검색 파이프라인을 조립하는 애플리케이션 파사드를 제공한다.
//
// 설명:
// - 감지기 -> 스테머 -> 아이템 생성기, HTTP 카탈로그, PostgreSQL 저장소를 연결한다.
// - 저장소 연결 직후 스키마를 보장한다.
//
// 디자인 패턴:
// - 파사드(Facade) + 구성 루트(Composition Root).
//
// 참조:
// - src_rs/core/config.rs
// - src_rs/main.rs

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::catalog::xkcd_http::XkcdCatalog;
use crate::catalog::RemoteCatalog;
use crate::core::config::AppConfigPayload;
use crate::core::errors::CoreResult;
use crate::core::ingestion_pipeline::{IngestionPipeline, IngestionReport};
use crate::core::item::Item;
use crate::core::item_generator::ItemGenerator;
use crate::core::search_pipeline::SearchPipeline;
use crate::index::postgres_repo::PostgresItemStore;
use crate::index::ItemStore;
use crate::text::language::{LanguageDetector, WhatlangDetector};
use crate::text::stemming::{KeywordStemmer, SnowballStemmer};

pub struct Application {
    ingestion: IngestionPipeline,
    search: SearchPipeline,
    search_language: String,
    default_limit: usize,
}

impl Application {
    pub async fn from_config(config: &AppConfigPayload) -> CoreResult<Self> {
        config.validate()?;

        let catalog: Arc<dyn RemoteCatalog> =
            Arc::new(XkcdCatalog::new(config.catalog.clone())?);

        let store = PostgresItemStore::connect(&config.postgres).await?;
        store.ensure_schema().await?;
        let store: Arc<dyn ItemStore> = Arc::new(store);

        Ok(Self::from_parts(config, catalog, store))
    }

    /// 이미 준비된 카탈로그/저장소로 조립한다.
    pub fn from_parts(
        config: &AppConfigPayload,
        catalog: Arc<dyn RemoteCatalog>,
        store: Arc<dyn ItemStore>,
    ) -> Self {
        let detector: Arc<dyn LanguageDetector> =
            Arc::new(WhatlangDetector::new(config.text.min_confidence));
        let stemmer: Arc<dyn KeywordStemmer> = Arc::new(SnowballStemmer::new(detector));
        let generator = Arc::new(ItemGenerator::new(stemmer.clone()));

        Self {
            ingestion: IngestionPipeline::new(
                catalog,
                store.clone(),
                generator,
                config.ingestion.clone(),
            ),
            search: SearchPipeline::new(store, stemmer),
            search_language: config.search.language.clone(),
            default_limit: config.search.default_limit,
        }
    }

    pub async fn ingest(&self, cancel: CancellationToken) -> CoreResult<IngestionReport> {
        self.ingestion.execute(cancel).await
    }

    /// `limit`이 None이면 설정의 기본값을 사용한다.
    pub async fn search(&self, query: &str, limit: Option<usize>) -> CoreResult<Vec<Item>> {
        let limit = limit.unwrap_or(self.default_limit);
        self.search
            .execute(query, limit, &self.search_language)
            .await
    }
}

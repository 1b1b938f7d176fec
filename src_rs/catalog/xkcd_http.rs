// 목적:
// - xkcd JSON API를 원격 카탈로그로 사용하는 HTTP 어댑터를 제공한다.
//
// 설명:
// - `{base_url}/{id}/{info_path}`로 개별 아이템을, `{base_url}/{info_path}`로 최신 번호를 조회한다.
// - 404는 NotFound, 그 밖의 비정상 상태/통신 실패는 Transport로 구분한다.
// - 재시도는 하지 않는다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/catalog/mod.rs
// - src_rs/core/config.rs

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::catalog::{RawItem, RemoteCatalog};
use crate::core::config::CatalogConfigPayload;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::item::ItemId;

/// xkcd `info.0.json` 응답 본문이다.
#[derive(Debug, Clone, Deserialize)]
pub struct XkcdComicPayload {
    #[serde(default)]
    pub num: i64,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub safe_title: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub transcript: String,
}

impl XkcdComicPayload {
    /// 키워드 추출에 사용할 본문(제목, alt, 대본)을 만든다.
    pub fn description(&self) -> String {
        let title = if self.title.trim().is_empty() {
            self.safe_title.as_str()
        } else {
            self.title.as_str()
        };

        [title, self.alt.as_str(), self.transcript.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn into_raw_item(self) -> RawItem {
        let text = self.description();
        RawItem {
            id: self.num,
            image_url: self.img,
            text,
        }
    }
}

#[derive(Clone)]
pub struct XkcdCatalog {
    client: Client,
    config: CatalogConfigPayload,
}

impl XkcdCatalog {
    pub fn new(config: CatalogConfigPayload) -> CoreResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|error| {
                CoreError::Transport(format!("HTTP 클라이언트 생성 실패: {}", error))
            })?;

        Ok(Self { client, config })
    }

    fn item_url(&self, id: ItemId) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            id,
            self.config.info_path.trim_start_matches('/')
        )
    }

    fn latest_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.info_path.trim_start_matches('/')
        )
    }

    async fn fetch_payload(&self, url: &str, id: Option<ItemId>) -> CoreResult<XkcdComicPayload> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| CoreError::Transport(format!("카탈로그 HTTP 요청 실패: {}", error)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(CoreError::NotFound(id));
            }
        }

        let body = response
            .text()
            .await
            .map_err(|error| {
                CoreError::Transport(format!("카탈로그 HTTP 본문 읽기 실패: {}", error))
            })?;

        if !status.is_success() {
            return Err(CoreError::Transport(format!(
                "카탈로그 HTTP 상태 오류: status={}, url={}",
                status, url
            )));
        }

        serde_json::from_str::<XkcdComicPayload>(&body).map_err(|error| {
            CoreError::Serialization(format!("카탈로그 응답 파싱 실패: {}, url={}", error, url))
        })
    }
}

#[async_trait]
impl RemoteCatalog for XkcdCatalog {
    async fn fetch(&self, id: ItemId) -> CoreResult<RawItem> {
        let url = self.item_url(id);
        let payload = self.fetch_payload(&url, Some(id)).await?;
        let mut raw = payload.into_raw_item();
        // 일부 응답은 num을 빠뜨리므로 요청 번호를 신뢰한다.
        raw.id = id;
        Ok(raw)
    }

    async fn count(&self) -> CoreResult<i64> {
        let url = self.latest_url();
        let payload = self.fetch_payload(&url, None).await?;
        Ok(payload.num.max(0))
    }
}

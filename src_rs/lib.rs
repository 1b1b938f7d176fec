// 목적:
// - xkcd finder 런타임 라이브러리의 진입점을 제공한다.
//
// 설명:
// - 원격 카탈로그 백필(적재)과 키워드 겹침 검색을 제공한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/catalog/index/text).
//
// 참조:
// - src_rs/api/application.rs
// - src_rs/core/ingestion_pipeline.rs
// - src_rs/core/search_pipeline.rs

pub mod api;
pub mod catalog;
pub mod core;
pub mod index;
pub mod text;

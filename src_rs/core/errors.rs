// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 입력/설정/원격 카탈로그/언어 감지/DB/직렬화 오류를 명시적으로 구분한다.
// - 치명 여부는 오류 자체가 아니라 호출 지점(부트스트랩 vs 아이템 단위)이 결정한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/ingestion_pipeline.rs
// - src_rs/core/search_pipeline.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("원격 카탈로그 호출에 실패했습니다: {0}")]
    Transport(String),
    #[error("원격 카탈로그에 아이템이 없습니다: id={0}")]
    NotFound(i64),
    #[error("언어 감지에 실패했습니다: {0}")]
    DetectionFailed(String),
    #[error("데이터베이스 작업에 실패했습니다: {0}")]
    Persistence(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

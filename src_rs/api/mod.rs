// 목적:
// - 외부 진입점(바이너리/라이브러리 사용자)이 쓰는 경계 모듈을 선언한다.
//
// 설명:
// - 설정 하나로 적재/검색 파이프라인을 조립하는 애플리케이션 파사드를 제공한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/application.rs

pub mod application;

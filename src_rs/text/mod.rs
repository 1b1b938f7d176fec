// 목적:
// - 텍스트 -> 키워드 추출 계층 모듈을 선언한다.
//
// 설명:
// - 언어 감지, 불용어 제거, 스테밍을 분리해 각각 독립적으로 교체/검증할 수 있게 한다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 전략(Strategy).
//
// 참조:
// - src_rs/text/language.rs
// - src_rs/text/stopwords.rs
// - src_rs/text/stemming.rs

pub mod language;
pub mod stemming;
pub mod stopwords;

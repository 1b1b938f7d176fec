// 목적:
// - 원문 텍스트에서 ISO 639-1 두 글자 언어 코드를 추론한다.
//
// 설명:
// - whatlang 감지 결과를 두 글자 코드로 변환한다.
// - 감지 불가, 신뢰도 부족, 두 글자 코드가 없는 언어는 모두 DetectionFailed로 처리한다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/text/stemming.rs

use whatlang::Lang;

use crate::core::errors::{CoreError, CoreResult};

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// 텍스트의 언어 코드를 추론하는 기능 경계다.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> CoreResult<String>;
}

#[derive(Debug, Clone)]
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl WhatlangDetector {
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CONFIDENCE)
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> CoreResult<String> {
        let info = whatlang::detect(text).ok_or_else(|| {
            CoreError::DetectionFailed("언어를 판별할 수 없습니다".to_string())
        })?;

        if !info.is_reliable() && info.confidence() < self.min_confidence {
            return Err(CoreError::DetectionFailed(format!(
                "감지 신뢰도가 부족합니다: lang={}, confidence={:.3}",
                info.lang().code(),
                info.confidence()
            )));
        }

        two_letter_code(info.lang())
            .map(str::to_string)
            .ok_or_else(|| {
                CoreError::DetectionFailed(format!(
                    "ISO 639-1 코드가 없는 언어입니다: {}",
                    info.lang().code()
                ))
            })
    }
}

/// 감지 결과를 고정하는 대역(test double) 구현이다.
#[derive(Debug, Clone)]
pub struct FixedLanguageDetector {
    code: Option<String>,
}

impl FixedLanguageDetector {
    pub fn returning(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    pub fn failing() -> Self {
        Self { code: None }
    }
}

impl LanguageDetector for FixedLanguageDetector {
    fn detect(&self, _text: &str) -> CoreResult<String> {
        self.code.clone().ok_or_else(|| {
            CoreError::DetectionFailed("고정 감지기가 실패하도록 설정되었습니다".to_string())
        })
    }
}

fn two_letter_code(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Rus => "ru",
        Lang::Cmn => "zh",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ukr => "uk",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Heb => "he",
        Lang::Pol => "pl",
        Lang::Kor => "ko",
        Lang::Nob => "nb",
        Lang::Dan => "da",
        Lang::Swe => "sv",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Nld => "nl",
        Lang::Hun => "hu",
        Lang::Ces => "cs",
        Lang::Ell => "el",
        Lang::Bul => "bg",
        Lang::Ron => "ro",
        Lang::Tam => "ta",
        Lang::Vie => "vi",
        Lang::Lit => "lt",
        Lang::Lav => "lv",
        Lang::Est => "et",
        Lang::Epo => "eo",
        _ => return None,
    };
    Some(code)
}

// 목적:
// - 언어별 불용어 목록과 조회 함수를 제공한다.
//
// 설명:
// - 목록은 컴파일 타임 상수이며 런타임 전역 상태가 없다.
// - 알 수 없는 언어 코드는 영어 목록으로 대체한다.
//
// 참조:
// - src_rs/text/stemming.rs

use std::collections::{HashMap, HashSet};

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

const SPANISH: &[&str] = &[
    "a", "al", "algo", "ante", "con", "contra", "cual", "cuando", "de", "del", "desde", "donde",
    "durante", "e", "el", "ella", "ellas", "ellos", "en", "entre", "era", "es", "esa", "ese",
    "eso", "esta", "este", "esto", "fue", "ha", "hay", "la", "las", "le", "les", "lo", "los",
    "mas", "me", "mi", "muy", "nada", "ni", "no", "nos", "o", "para", "pero", "por", "porque",
    "que", "se", "sin", "sobre", "su", "sus", "también", "te", "tu", "un", "una", "uno", "unos",
    "y", "ya", "yo",
];

const FRENCH: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "mes", "moi", "mon", "ne",
    "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre",
    "vous", "est", "sont", "été", "être", "avoir",
];

const GERMAN: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "da",
    "das", "dass", "dem", "den", "der", "des", "die", "doch", "du", "ein", "eine", "einem",
    "einen", "einer", "es", "für", "hat", "ich", "ihr", "im", "in", "ist", "ja", "kein", "mit",
    "nicht", "noch", "nur", "oder", "sich", "sie", "sind", "so", "um", "und", "uns", "von", "war",
    "was", "wie", "wir", "zu", "zum", "zur",
];

const ITALIAN: &[&str] = &[
    "a", "ad", "al", "alla", "anche", "che", "chi", "come", "con", "da", "dal", "de", "dei",
    "del", "della", "di", "e", "è", "gli", "ha", "i", "il", "in", "io", "la", "le", "lo", "ma",
    "mi", "ne", "nel", "non", "o", "per", "più", "questo", "se", "si", "sono", "su", "sua", "suo",
    "tu", "un", "una", "uno",
];

const PORTUGUESE: &[&str] = &[
    "a", "ao", "aos", "as", "com", "como", "da", "das", "de", "do", "dos", "e", "é", "ela", "ele",
    "em", "entre", "era", "eu", "foi", "isso", "isto", "já", "lhe", "mais", "mas", "me", "na",
    "nas", "no", "nos", "não", "o", "os", "ou", "para", "pela", "pelo", "por", "que", "se", "sem",
    "seu", "sua", "são", "também", "um", "uma",
];

const DUTCH: &[&str] = &[
    "aan", "al", "als", "bij", "dat", "de", "den", "der", "die", "dit", "een", "en", "er", "had",
    "heb", "het", "hij", "hoe", "ik", "in", "is", "je", "maar", "me", "met", "mij", "na", "niet",
    "nog", "nu", "of", "om", "ook", "op", "over", "te", "tot", "uit", "van", "voor", "was", "wat",
    "we", "wel", "zal", "ze", "zij", "zijn", "zo",
];

const RUSSIAN: &[&str] = &[
    "а", "без", "бы", "был", "была", "были", "было", "в", "вам", "вас", "во", "вот", "все", "вы",
    "да", "для", "до", "его", "ее", "если", "есть", "еще", "же", "за", "и", "из", "или", "им",
    "их", "к", "как", "когда", "ли", "мне", "мы", "на", "не", "него", "нет", "ни", "но", "ну",
    "о", "об", "он", "она", "они", "оно", "от", "по", "с", "так", "то", "только", "ты", "у",
    "уже", "что", "это", "я",
];

const SWEDISH: &[&str] = &[
    "att", "av", "de", "del", "dem", "den", "det", "du", "där", "efter", "ej", "en", "er", "ett",
    "för", "från", "ha", "han", "hade", "har", "hon", "i", "inte", "jag", "med", "men", "mot",
    "och", "om", "på", "sig", "sin", "som", "så", "till", "under", "upp", "ut", "var", "vi",
    "vid", "är",
];

/// 언어 코드별 불용어 목록을 반환한다. 알 수 없는 코드는 영어 목록을 사용한다.
pub fn stopwords_for(language_code: &str) -> &'static [&'static str] {
    match language_code.trim().to_ascii_lowercase().as_str() {
        "es" => SPANISH,
        "fr" => FRENCH,
        "de" => GERMAN,
        "it" => ITALIAN,
        "pt" => PORTUGUESE,
        "nl" => DUTCH,
        "ru" => RUSSIAN,
        "sv" => SWEDISH,
        _ => ENGLISH,
    }
}

/// 언어별 불용어 집합을 한 번만 구성해 재사용하는 조회 테이블이다.
#[derive(Debug, Clone)]
pub struct StopwordIndex {
    by_language: HashMap<&'static str, HashSet<&'static str>>,
    fallback: HashSet<&'static str>,
}

impl StopwordIndex {
    pub fn new() -> Self {
        let by_language = ["es", "fr", "de", "it", "pt", "nl", "ru", "sv"]
            .into_iter()
            .map(|code| (code, stopwords_for(code).iter().copied().collect()))
            .collect();

        Self {
            by_language,
            fallback: ENGLISH.iter().copied().collect(),
        }
    }

    pub fn is_stopword(&self, language_code: &str, token: &str) -> bool {
        let normalized = language_code.trim().to_ascii_lowercase();
        self.by_language
            .get(normalized.as_str())
            .unwrap_or(&self.fallback)
            .contains(token)
    }
}

impl Default for StopwordIndex {
    fn default() -> Self {
        Self::new()
    }
}

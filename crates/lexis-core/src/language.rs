use std::collections::HashSet;

use crate::preprocess::tokenize;

/// Static metadata for a supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    /// ISO 639-1 code, also used by Google and Glosbe
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    /// Lowercase English name used in PONS and Linguee URLs
    pub slug: &'static str,
}

/// Supported languages. Adding a row here enables it for every source.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        flag: "🇩🇪",
        slug: "german",
    },
    LanguageInfo {
        code: "fr",
        name: "French",
        native_name: "Français",
        flag: "🇫🇷",
        slug: "french",
    },
];

pub fn language_info(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    language_info(code).is_some()
}

/// The other language of a two-language setup
pub fn opposite(code: &str) -> Option<&'static str> {
    let mut others = LANGUAGES.iter().filter(|lang| lang.code != code);
    match (others.next(), others.next()) {
        (Some(only), None) if is_supported(code) => Some(only.code),
        _ => None,
    }
}

/// Display name for a code, falling back to the code itself
pub fn display_name(code: &str) -> &str {
    language_info(code).map(|lang| lang.name).unwrap_or(code)
}

pub fn flag(code: &str) -> &str {
    language_info(code).map(|lang| lang.flag).unwrap_or("")
}

const GERMAN_WORDS: &[&str] = &[
    "der", "die", "das", "ein", "eine", "und", "ist", "nicht", "ich", "du", "er", "sie", "wir",
    "ihr", "mit", "von", "auf", "für", "aber", "auch", "noch", "nach", "bei", "dem", "den", "des",
    "sich", "es", "haben", "sein", "werden", "kann", "hat", "sind", "war", "wenn", "nur", "wie",
    "so", "als", "oder", "diese", "einem", "einer",
];

const FRENCH_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "est", "sont", "je", "tu", "il", "elle", "nous", "vous",
    "ils", "avec", "pour", "dans", "sur", "pas", "mais", "ou", "que", "qui", "ce", "cette", "aux",
    "du", "être", "avoir", "fait", "très", "bien", "tout", "plus", "comme", "aussi", "même",
    "entre", "après", "sans", "chez", "peu",
];

const GERMAN_CHARS: &str = "äöüß";
const FRENCH_CHARS: &str = "éèêëçàùîôû";

/// Guess the (source, target) direction of a German/French text.
///
/// Scores distinct stop words plus one point per distinctive letter present.
/// Returns `None` on a tie.
pub fn detect_direction(text: &str) -> Option<(&'static str, &'static str)> {
    let lower = text.to_lowercase();
    let words: HashSet<String> = tokenize(&lower).into_iter().collect();

    let mut de_score = GERMAN_WORDS.iter().filter(|w| words.contains(**w)).count();
    let mut fr_score = FRENCH_WORDS.iter().filter(|w| words.contains(**w)).count();

    de_score += GERMAN_CHARS.chars().filter(|c| lower.contains(*c)).count();
    fr_score += FRENCH_CHARS.chars().filter(|c| lower.contains(*c)).count();

    if de_score > fr_score {
        Some(("de", "fr"))
    } else if fr_score > de_score {
        Some(("fr", "de"))
    } else {
        None
    }
}

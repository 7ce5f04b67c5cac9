use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::LanguageCode;

/// Marker stored as the main translation when no source produced one
pub const UNKNOWN_TRANSLATION: &str = "?";

/// One dictionary sense: a disambiguating meaning and its rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub meaning: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub phrase: String,
    pub translation: String,
}

/// Example sentence pair taken from real texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub original: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Word class with optional gender, e.g. "noun, neuter"
    #[serde(rename = "type")]
    pub kind: String,
    pub definition: String,
}

/// Aggregated result of a single word lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub word: String,
    pub src: LanguageCode,
    pub tgt: LanguageCode,
    pub main_translation: String,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default)]
    pub senses: Vec<Sense>,
    #[serde(default)]
    pub phrases: Vec<Phrase>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Source-language words obtained by back-translation. Approximate.
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl TranslationResult {
    /// Empty result carrying the unknown marker
    pub fn empty(word: &str, src: &str, tgt: &str) -> Self {
        Self {
            word: word.to_string(),
            src: src.to_string(),
            tgt: tgt.to_string(),
            main_translation: UNKNOWN_TRANSLATION.to_string(),
            translations: Vec::new(),
            senses: Vec::new(),
            phrases: Vec::new(),
            definitions: Vec::new(),
            examples: Vec::new(),
            synonyms: Vec::new(),
        }
    }

    pub fn has_main_translation(&self) -> bool {
        !self.main_translation.is_empty() && self.main_translation != UNKNOWN_TRANSLATION
    }

    /// Target-language alternatives to the first translation
    pub fn alternatives(&self) -> &[String] {
        self.translations.get(1..).unwrap_or(&[])
    }
}

/// Result of a full-sentence translation with a word-by-word gloss
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceResult {
    pub original: String,
    pub translation: Option<String>,
    pub src: LanguageCode,
    pub tgt: LanguageCode,
    #[serde(default)]
    pub word_by_word: BTreeMap<String, String>,
}

/// Either kind of lookup, as returned by the web API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lookup {
    Word(TranslationResult),
    Sentence(SentenceResult),
}

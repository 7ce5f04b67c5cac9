pub mod history;
pub mod translation;

pub use history::{HistoryEntry, SessionStats};
pub use translation::{
    Definition, Example, Lookup, Phrase, SentenceResult, Sense, TranslationResult,
    UNKNOWN_TRANSLATION,
};

/// ISO 639-1 language code ("de", "fr", ...)
pub type LanguageCode = String;

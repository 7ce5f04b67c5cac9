mod cache;

pub use cache::TranslationCache;
pub use lexis_types::LanguageCode;

use lexis_types::{Definition, Example, Phrase, Sense};
use serde::{Deserialize, Serialize};

/// Machine translation provider, used as the primary source
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError>;

    /// Detect language of text
    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Dictionary-style provider returning several partial fields, used as a secondary source
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    async fn lookup(&self, word: &str, from: &str, to: &str)
    -> Result<SourceResult, TranslateError>;

    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

/// Normalized partial result of one dictionary source. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceResult {
    pub translations: Vec<String>,
    pub senses: Vec<Sense>,
    pub phrases: Vec<Phrase>,
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
}

impl SourceResult {
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
            && self.senses.is_empty()
            && self.phrases.is_empty()
            && self.definitions.is_empty()
            && self.examples.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Unexpected response format: {0}")]
    ParseError(String),

    #[error("Empty response")]
    EmptyResponse,
}

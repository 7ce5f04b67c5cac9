use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future::join_all;
use lexis_config::lookup::LookupConfig;
use lexis_translator::{DictionarySource, SourceResult, Translator};
use lexis_types::{Lookup, SentenceResult, TranslationResult, UNKNOWN_TRANSLATION};

use crate::language::{self, is_supported};
use crate::merge::{collect_synonyms, merge_translations};
use crate::preprocess::{tokenize, word_count};

/// Combines one primary translator and any number of dictionary sources into
/// a single best-effort result. Source failures never reach the caller.
pub struct Aggregator {
    primary: Arc<dyn Translator>,
    secondaries: Vec<Arc<dyn DictionarySource>>,
    config: LookupConfig,
}

impl Aggregator {
    pub fn new(primary: Arc<dyn Translator>, config: LookupConfig) -> Self {
        Self {
            primary,
            secondaries: Vec::new(),
            config,
        }
    }

    /// Register a secondary source. Registration order is merge priority.
    pub fn with_source(mut self, source: Arc<dyn DictionarySource>) -> Self {
        self.secondaries.push(source);
        self
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Names of all sources, primary first
    pub fn source_names(&self) -> Vec<String> {
        std::iter::once(self.primary.metadata().name)
            .chain(self.secondaries.iter().map(|s| s.metadata().name))
            .collect()
    }

    pub fn is_sentence(&self, text: &str) -> bool {
        word_count(text) > self.config.sentence_word_threshold
    }

    /// Word or sentence lookup, picked by word count unless forced
    pub async fn lookup(&self, text: &str, src: &str, tgt: &str, force_sentence: bool) -> Lookup {
        if force_sentence || self.is_sentence(text) {
            Lookup::Sentence(self.translate_sentence(text, src, tgt).await)
        } else {
            Lookup::Word(self.translate_word(text, src, tgt).await)
        }
    }

    pub async fn translate_word(&self, word: &str, src: &str, tgt: &str) -> TranslationResult {
        tracing::debug!("Looking up '{}' ({} -> {})", word, src, tgt);

        let (main, partials) = tokio::join!(
            self.primary_translation(word, src, tgt),
            self.query_sources(word, src, tgt)
        );

        let candidates = main
            .iter()
            .cloned()
            .chain(partials.iter().flat_map(|p| p.translations.iter().cloned()));
        let translations = merge_translations(candidates);

        let main_translation = main
            .or_else(|| translations.first().cloned())
            .unwrap_or_else(|| UNKNOWN_TRANSLATION.to_string());

        let synonyms = self.derive_synonyms(word, &translations, src, tgt).await;

        let mut result = TranslationResult::empty(word, src, tgt);
        result.main_translation = main_translation;
        result.translations = translations;
        result.synonyms = synonyms;
        for partial in partials {
            result.senses.extend(partial.senses);
            result.phrases.extend(partial.phrases);
            result.definitions.extend(partial.definitions);
            result.examples.extend(partial.examples);
        }

        tracing::debug!(
            "Aggregated '{}': {} translations, {} senses, {} examples",
            word,
            result.translations.len(),
            result.senses.len(),
            result.examples.len()
        );

        result
    }

    /// Translate the whole sentence, then each longer token on its own
    pub async fn translate_sentence(&self, sentence: &str, src: &str, tgt: &str) -> SentenceResult {
        let translation = self.primary_translation(sentence, src, tgt).await;

        let mut word_by_word = BTreeMap::new();
        for token in tokenize(sentence) {
            if token.chars().count() <= self.config.gloss_min_len {
                continue;
            }
            if let Some(gloss) = self.primary_translation(&token, src, tgt).await {
                word_by_word.insert(token, gloss);
            }
        }

        SentenceResult {
            original: sentence.to_string(),
            translation,
            src: src.to_string(),
            tgt: tgt.to_string(),
            word_by_word,
        }
    }

    /// Primary source only, no dictionaries and no synonyms
    pub async fn quick_translate(&self, text: &str, src: &str, tgt: &str) -> TranslationResult {
        let mut result = TranslationResult::empty(text, src, tgt);
        if let Some(translation) = self.primary_translation(text, src, tgt).await {
            result.translations = vec![translation.clone()];
            result.main_translation = translation;
        }
        result
    }

    /// Heuristic first, then the primary's detector
    pub async fn detect_direction(&self, text: &str) -> Option<(String, String)> {
        if let Some((src, tgt)) = language::detect_direction(text) {
            return Some((src.to_string(), tgt.to_string()));
        }

        match self.primary.detect_language(text).await {
            Ok(code) if is_supported(&code) => {
                let tgt = language::opposite(&code)?;
                Some((code, tgt.to_string()))
            }
            Ok(code) => {
                tracing::debug!("Detected unsupported language '{}'", code);
                None
            }
            Err(e) => {
                tracing::warn!("Language detection failed: {}", e);
                None
            }
        }
    }

    async fn primary_translation(&self, text: &str, from: &str, to: &str) -> Option<String> {
        match self.primary.translate(text, from, to).await {
            Ok(translation) => {
                let text = translation.text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Err(e) => {
                tracing::warn!("{} failed for '{}': {}", self.primary.metadata().name, text, e);
                None
            }
        }
    }

    async fn query_sources(&self, word: &str, from: &str, to: &str) -> Vec<SourceResult> {
        let lookups = self.secondaries.iter().map(|source| async move {
            let name = source.metadata().name;
            match source.lookup(word, from, to).await {
                Ok(result) => {
                    tracing::debug!("{} returned {} translations", name, result.translations.len());
                    result
                }
                Err(e) => {
                    tracing::warn!("{} failed for '{}': {}", name, word, e);
                    SourceResult::default()
                }
            }
        });

        join_all(lookups).await
    }

    async fn derive_synonyms(
        &self,
        word: &str,
        translations: &[String],
        src: &str,
        tgt: &str,
    ) -> Vec<String> {
        let mut back_translations = Vec::new();
        for translation in translations.iter().take(self.config.synonym_depth) {
            if let Some(back) = self.primary_translation(translation, tgt, src).await {
                back_translations.push(back);
            }
        }
        collect_synonyms(word, back_translations)
    }
}

use anyhow::Context;
use chrono::Utc;
use lexis_config::Config;
use lexis_core::language::{is_supported, opposite};
use lexis_core::preprocess::normalize;
use lexis_core::{Aggregator, InputError, error};
use lexis_history::{HistoryError, HistoryStore, RecordOutcome, StatsStore};
use lexis_types::{Lookup, TranslationResult};
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Sentence when the text has more words than the configured threshold
    #[default]
    Auto,
    Word,
    Sentence,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to save history: {0}")]
    Storage(#[from] HistoryError),
}

/// A lookup and, for words, what happened in history
#[derive(Debug)]
pub struct LookupReport {
    pub lookup: Lookup,
    pub recorded: Option<RecordOutcome>,
}

pub struct AppState {
    pub config: Config,
    pub aggregator: Aggregator,
    pub history: Mutex<HistoryStore>,
    pub stats: Mutex<StatsStore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let aggregator = lexis_sources::build_aggregator(&config)
            .context("Failed to set up translation sources")?;
        Ok(Self::with_aggregator(config, aggregator))
    }

    pub fn with_aggregator(config: Config, aggregator: Aggregator) -> Self {
        let history = HistoryStore::load(config.storage.history_path());
        let stats = StatsStore::load(config.storage.stats_path());

        Self {
            config,
            aggregator,
            history: Mutex::new(history),
            stats: Mutex::new(stats),
        }
    }

    /// Fill in a missing side of the direction, detecting it from the text
    /// when neither side is given
    pub async fn resolve_direction(
        &self,
        text: &str,
        src: Option<&str>,
        tgt: Option<&str>,
    ) -> Result<(String, String), InputError> {
        let (src, tgt) = match (src, tgt) {
            (Some(src), Some(tgt)) => (src.to_string(), tgt.to_string()),
            (Some(src), None) => (src.to_string(), counterpart(src)?),
            (None, Some(tgt)) => (counterpart(tgt)?, tgt.to_string()),
            (None, None) => match self.aggregator.detect_direction(text).await {
                Some(direction) => direction,
                None => {
                    tracing::debug!("Direction not detected, using configured default");
                    (
                        self.config.default_src.clone(),
                        self.config.default_tgt.clone(),
                    )
                }
            },
        };

        error::validate_direction(&src, &tgt)?;
        Ok((src, tgt))
    }

    /// Validate, translate and record word lookups in history
    pub async fn lookup(
        &self,
        text: &str,
        src: Option<&str>,
        tgt: Option<&str>,
        mode: LookupMode,
    ) -> Result<LookupReport, LookupError> {
        let text = normalize(error::validate_text(text)?);
        let (src, tgt) = self.resolve_direction(&text, src, tgt).await?;

        let lookup = match mode {
            LookupMode::Auto => self.aggregator.lookup(&text, &src, &tgt, false).await,
            LookupMode::Word => Lookup::Word(self.aggregator.translate_word(&text, &src, &tgt).await),
            LookupMode::Sentence => {
                Lookup::Sentence(self.aggregator.translate_sentence(&text, &src, &tgt).await)
            }
        };

        let recorded = match &lookup {
            Lookup::Word(result) => Some(self.record_word(result).await?),
            Lookup::Sentence(_) => None,
        };

        Ok(LookupReport { lookup, recorded })
    }

    /// Primary source only; nothing is recorded
    pub async fn quick_translate(
        &self,
        text: &str,
        src: Option<&str>,
        tgt: Option<&str>,
    ) -> Result<TranslationResult, InputError> {
        let text = normalize(error::validate_text(text)?);
        let (src, tgt) = self.resolve_direction(&text, src, tgt).await?;
        Ok(self.aggregator.quick_translate(&text, &src, &tgt).await)
    }

    async fn record_word(&self, result: &TranslationResult) -> Result<RecordOutcome, HistoryError> {
        let mut history = self.history.lock().await;
        let outcome = history.record_lookup(result, Utc::now(), &self.config.lookup);
        history.save()?;
        tracing::debug!("Recorded '{}' in history: {:?}", result.word, outcome);
        Ok(outcome)
    }
}

fn counterpart(code: &str) -> Result<String, InputError> {
    if !is_supported(code) {
        return Err(InputError::UnsupportedLanguage(code.to_string()));
    }
    opposite(code)
        .map(str::to_string)
        .ok_or_else(|| InputError::UnsupportedLanguage(code.to_string()))
}

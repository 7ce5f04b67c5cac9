pub mod glosbe;
pub mod google;
pub mod http;
pub mod linguee;
pub mod pons;

use std::sync::Arc;

use lexis_config::Config;
use lexis_core::Aggregator;
use lexis_core::language::{LanguageInfo, language_info};
use lexis_translator::TranslateError;

pub use glosbe::GlosbeSource;
pub use google::GoogleTranslator;
pub use linguee::LingueeSource;
pub use pons::PonsSource;

/// Wire the configured sources into an aggregator.
///
/// Google is the primary; Linguee, PONS and Glosbe follow in that priority.
pub fn build_aggregator(config: &Config) -> Result<Aggregator, TranslateError> {
    let client = http::build_client(&config.network)?;
    let sources = &config.sources;

    let google = GoogleTranslator::new(
        client.clone(),
        sources.google_url.clone(),
        config.network.cache_capacity,
    );
    let mut aggregator = Aggregator::new(Arc::new(google), config.lookup.clone());

    if sources.linguee_enabled {
        aggregator = aggregator.with_source(Arc::new(LingueeSource::new(
            client.clone(),
            sources.linguee_url.clone(),
        )));
    }
    if sources.pons_enabled {
        aggregator = aggregator.with_source(Arc::new(PonsSource::new(
            client.clone(),
            sources.pons_url.clone(),
        )));
    }
    if sources.glosbe_enabled {
        aggregator = aggregator.with_source(Arc::new(GlosbeSource::new(
            client,
            sources.glosbe_url.clone(),
        )));
    }

    tracing::info!("Sources: {}", aggregator.source_names().join(", "));
    Ok(aggregator)
}

/// Resolve both codes against the language table
pub(crate) fn language_pair(
    from: &str,
    to: &str,
) -> Result<(&'static LanguageInfo, &'static LanguageInfo), TranslateError> {
    match (language_info(from), language_info(to)) {
        (Some(src), Some(tgt)) => Ok((src, tgt)),
        _ => Err(TranslateError::UnsupportedLanguagePair {
            from: from.to_string(),
            to: to.to_string(),
        }),
    }
}

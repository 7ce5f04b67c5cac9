use async_trait::async_trait;
use lexis_translator::{
    LanguageCode, ProviderMetadata, TranslateError, Translation, TranslationCache, Translator,
};
use serde_json::Value;

use crate::language_pair;

const PROVIDER: &str = "Google Translate";

/// Free Google Translate endpoint (`client=gtx`), the primary source
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
    cache: TranslationCache,
}

impl GoogleTranslator {
    pub fn new(client: reqwest::Client, api_url: String, cache_capacity: Option<usize>) -> Self {
        Self {
            client,
            api_url,
            cache: TranslationCache::with_capacity(cache_capacity),
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    async fn request(&self, text: &str, sl: &str, tl: &str) -> Result<Value, TranslateError> {
        let url = format!("{}/translate_a/single", self.api_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", sl),
                ("tl", tl),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::ParseError(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        language_pair(from, to)?;

        let translated = match self.cache.get(text, from, to) {
            Some(hit) => hit,
            None => {
                let json = self.request(text, from, to).await?;
                let translated = parse_translation(&json)?;
                self.cache.insert(text, from, to, translated.clone());
                translated
            }
        };

        Ok(Translation {
            text: translated,
            from: from.to_string(),
            to: to.to_string(),
            provider: PROVIDER.to_string(),
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let json = self.request(text, "auto", "en").await?;
        parse_detected_language(&json)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: PROVIDER.to_string(),
            requires_api_key: false,
        }
    }
}

/// Concatenate the translated segments found at `data[0][i][0]`
pub fn parse_translation(json: &Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::ParseError("No segment list in response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        return Err(TranslateError::EmptyResponse);
    }
    Ok(text)
}

/// Source language reported at `data[2]` when called with `sl=auto`
pub fn parse_detected_language(json: &Value) -> Result<LanguageCode, TranslateError> {
    json.get(2)
        .and_then(Value::as_str)
        .map(|code| code.to_lowercase())
        .ok_or_else(|| TranslateError::ParseError("No detected language".to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_single_segment() {
        let data = json!([[["maison", "Haus", null, null, 10]], null, "de"]);
        assert_eq!(parse_translation(&data).unwrap(), "maison");
    }

    #[test]
    fn test_parse_joins_segments() {
        let data = json!([
            [
                ["Je suis fatigué. ", "Ich bin müde. ", null, null, 3],
                ["Je vais dormir.", "Ich gehe schlafen.", null, null, 3]
            ],
            null,
            "de"
        ]);
        assert_eq!(
            parse_translation(&data).unwrap(),
            "Je suis fatigué. Je vais dormir."
        );
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert!(matches!(
            parse_translation(&json!({"error": "nope"})),
            Err(TranslateError::ParseError(_))
        ));
        assert!(matches!(
            parse_translation(&json!([[]])),
            Err(TranslateError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_detected_language() {
        let data = json!([[["house", "Haus", null, null, 10]], null, "DE"]);
        assert_eq!(parse_detected_language(&data).unwrap(), "de");
        assert!(parse_detected_language(&json!([[]])).is_err());
    }

    #[tokio::test]
    async fn test_cached_translation_skips_network() {
        // unroutable URL: any real request would fail
        let google = GoogleTranslator::new(reqwest::Client::new(), "http://127.0.0.1:9".into(), None);
        google.cache().insert("Haus", "de", "fr", "maison".into());

        let translation = google.translate("Haus", "de", "fr").await.unwrap();
        assert_eq!(translation.text, "maison");
        assert_eq!(translation.provider, "Google Translate");
    }

    #[tokio::test]
    async fn test_unsupported_pair_is_rejected() {
        let google = GoogleTranslator::new(reqwest::Client::new(), "http://127.0.0.1:9".into(), None);
        assert!(matches!(
            google.translate("Haus", "de", "xx").await,
            Err(TranslateError::UnsupportedLanguagePair { .. })
        ));
    }
}

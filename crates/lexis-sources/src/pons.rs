use std::sync::LazyLock;

use async_trait::async_trait;
use lexis_core::language::language_info;
use lexis_translator::{DictionarySource, ProviderMetadata, SourceResult, TranslateError};
use lexis_types::{Phrase, Sense};
use regex::Regex;
use scraper::{Html, Selector};

use crate::http::{element_text, fetch_page};
use crate::language_pair;

static DL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dl").expect("valid selector"));
static DT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dt").expect("valid selector"));
static DD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("dd").expect("valid selector"));
static SENSE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".sense").expect("valid selector"));

// PONS renders "(mehrstöckiges Wohnhaus)" as "(mehrstöckigesWohnhaus)"
static GLUED_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zäöüß])([A-ZÄÖÜ])").expect("valid regex"));

/// Shorter entry heads are grammar labels, not phrases
const MIN_PHRASE_LEN: usize = 3;

/// PONS dictionary: senses and idiomatic phrases
pub struct PonsSource {
    client: reqwest::Client,
    base_url: String,
}

impl PonsSource {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn lookup_url(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let (src, tgt) = language_pair(from, to)?;
        Ok(format!(
            "{}/translate/{}-{}/{}",
            self.base_url.trim_end_matches('/'),
            src.slug,
            tgt.slug,
            urlencoding::encode(word)
        ))
    }
}

#[async_trait]
impl DictionarySource for PonsSource {
    async fn lookup(&self, word: &str, from: &str, to: &str) -> Result<SourceResult, TranslateError> {
        let url = self.lookup_url(word, from, to)?;
        let html = fetch_page(&self.client, &url).await?;
        let label = language_info(to).map(|lang| lang.name).unwrap_or_default();
        Ok(parse_page(&html, label))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "PONS".to_string(),
            requires_api_key: false,
        }
    }
}

/// Extract senses and phrases from a PONS result page.
///
/// `target_label` is the English name PONS prints in front of translations
/// (e.g. "French", "French (Canada)"); it is stripped from the output.
pub fn parse_page(html: &str, target_label: &str) -> SourceResult {
    let document = Html::parse_document(html);
    let label = label_regex(target_label);
    let mut result = SourceResult::default();

    for dl in document.select(&DL) {
        let (Some(dt), Some(dd)) = (dl.select(&DT).next(), dl.select(&DD).next()) else {
            continue;
        };

        let dt_text = element_text(dt, " ");
        let mut dd_text = element_text(dd, " ");
        if let Some(label) = &label {
            dd_text = label.replace_all(&dd_text, "").trim().to_string();
        }

        if let Some(sense) = dt.select(&SENSE).next() {
            let meaning = element_text(sense, " ");
            let meaning = GLUED_WORDS.replace_all(&meaning, "$1 $2").into_owned();
            result.senses.push(Sense {
                meaning,
                translation: dd_text,
            });
        } else if dt_text.chars().count() > MIN_PHRASE_LEN {
            result.phrases.push(Phrase {
                phrase: dt_text,
                translation: dd_text,
            });
        }
    }

    result
}

fn label_regex(target_label: &str) -> Option<Regex> {
    if target_label.is_empty() {
        return None;
    }
    Regex::new(&format!(r"{}\s*(\([^)]*\))?\s*", regex::escape(target_label))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <dl>
            <dt><span class="sense">(Gebäude)</span> Haus</dt>
            <dd>French maison f</dd>
          </dl>
          <dl>
            <dt><span class="sense">(mehrstöckigesWohnhaus)</span></dt>
            <dd>French (Canada) immeuble m</dd>
          </dl>
          <dl>
            <dt>außer Haus sein</dt>
            <dd>French être sorti(e)</dd>
          </dl>
          <dl>
            <dt>n</dt>
            <dd>nt</dd>
          </dl>
          <dl>
            <dt>nur ein Kopf</dt>
          </dl>
        </body></html>"#;

    #[test]
    fn test_senses_are_extracted_and_unglued() {
        let result = parse_page(PAGE, "French");

        assert_eq!(result.senses.len(), 2);
        assert_eq!(result.senses[0].meaning, "(Gebäude)");
        assert_eq!(result.senses[0].translation, "maison f");
        assert_eq!(result.senses[1].meaning, "(mehrstöckiges Wohnhaus)");
        assert_eq!(result.senses[1].translation, "immeuble m");
    }

    #[test]
    fn test_phrases_skip_short_heads_and_incomplete_entries() {
        let result = parse_page(PAGE, "French");

        assert_eq!(
            result.phrases,
            vec![Phrase {
                phrase: "außer Haus sein".into(),
                translation: "être sorti(e)".into(),
            }]
        );
    }

    #[test]
    fn test_unknown_label_keeps_text() {
        let result = parse_page(PAGE, "");
        assert_eq!(result.senses[0].translation, "French maison f");
    }

    #[test]
    fn test_lookup_url() {
        let source = PonsSource::new(reqwest::Client::new(), "https://en.pons.com".into());
        assert_eq!(
            source.lookup_url("Haus", "de", "fr").unwrap(),
            "https://en.pons.com/translate/german-french/Haus"
        );
        assert_eq!(
            source.lookup_url("à bientôt", "fr", "de").unwrap(),
            "https://en.pons.com/translate/french-german/%C3%A0%20bient%C3%B4t"
        );
    }
}

use std::sync::LazyLock;

use async_trait::async_trait;
use lexis_translator::{DictionarySource, ProviderMetadata, SourceResult, TranslateError};
use lexis_types::{Definition, Example};
use regex::Regex;
use scraper::{Html, Selector};

use crate::http::{element_text, fetch_page};
use crate::language_pair;

const MAX_TRANSLATIONS: usize = 10;
const MAX_DEFINITION_ITEMS: usize = 25;
const MAX_EXAMPLES: usize = 10;
const MAX_TRANSLATION_LEN: usize = 50;

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h3").expect("valid selector"));
static LIST_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid selector"));
static EXAMPLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".translation__example").expect("valid selector"));
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\w+)\s*(noun|verb|adjective|adverb)\s*(masculine|feminine|neuter)?\s*(.+)",
    )
    .expect("valid regex")
});
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!]").expect("valid regex"));

/// Glosbe: translations, short definitions and examples from real texts
pub struct GlosbeSource {
    client: reqwest::Client,
    base_url: String,
}

impl GlosbeSource {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn lookup_url(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let (src, tgt) = language_pair(from, to)?;
        Ok(format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            src.code,
            tgt.code,
            urlencoding::encode(word)
        ))
    }
}

#[async_trait]
impl DictionarySource for GlosbeSource {
    async fn lookup(&self, word: &str, from: &str, to: &str) -> Result<SourceResult, TranslateError> {
        let url = self.lookup_url(word, from, to)?;
        let html = fetch_page(&self.client, &url).await?;
        Ok(parse_page(&html))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Glosbe".to_string(),
            requires_api_key: false,
        }
    }
}

pub fn parse_page(html: &str) -> SourceResult {
    let document = Html::parse_document(html);

    let translations = document
        .select(&HEADING)
        .take(MAX_TRANSLATIONS)
        .map(|h| element_text(h, ""))
        .filter(|text| !text.is_empty() && text.chars().count() < MAX_TRANSLATION_LEN)
        .collect();

    let definitions = document
        .select(&LIST_ITEM)
        .take(MAX_DEFINITION_ITEMS)
        .filter_map(|li| parse_definition(&element_text(li, " ")))
        .collect();

    let examples = document
        .select(&EXAMPLE)
        .take(MAX_EXAMPLES)
        .filter_map(|example| {
            let mut paragraphs = example.select(&PARAGRAPH);
            let original = element_text(paragraphs.next()?, " ");
            let translation = element_text(paragraphs.next()?, " ");
            (!original.is_empty() && !translation.is_empty()).then_some(Example {
                original,
                translation,
            })
        })
        .collect();

    SourceResult {
        translations,
        definitions,
        examples,
        ..SourceResult::default()
    }
}

/// "Haus noun neuter A building for living in. Also ..." -> ("noun, neuter", "A building for living in")
pub fn parse_definition(text: &str) -> Option<Definition> {
    let captures = DEFINITION.captures(text)?;
    let word_type = captures.get(2)?.as_str();
    let rest = captures.get(4)?.as_str();

    let definition = SENTENCE_END.split(rest).next().unwrap_or_default().trim();
    let len = definition.chars().count();
    if len <= 5 || len >= 120 {
        return None;
    }

    let kind = match captures.get(3) {
        Some(gender) => format!("{}, {}", word_type, gender.as_str()),
        None => word_type.to_string(),
    };

    Some(Definition {
        kind,
        definition: definition.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <h3>maison</h3>
          <h3> domicile </h3>
          <h3>This heading is far too long to be a translation of a single word</h3>
          <ul>
            <li>Haus noun neuter A building that serves as living quarters. Other uses.</li>
            <li>Navigation</li>
            <li>wohnen verb Short.</li>
          </ul>
          <div class="translation__example">
            <p>Das Haus ist alt.</p>
            <p>La maison est vieille.</p>
          </div>
          <div class="translation__example">
            <p>Nur ein Satz.</p>
          </div>
        </body></html>"#;

    #[test]
    fn test_translations_filter_long_headings() {
        let result = parse_page(PAGE);
        assert_eq!(result.translations, vec!["maison", "domicile"]);
    }

    #[test]
    fn test_definitions_keep_first_sentence() {
        let result = parse_page(PAGE);
        assert_eq!(
            result.definitions,
            vec![Definition {
                kind: "noun, neuter".into(),
                definition: "A building that serves as living quarters".into(),
            }]
        );
    }

    #[test]
    fn test_examples_need_two_paragraphs() {
        let result = parse_page(PAGE);
        assert_eq!(
            result.examples,
            vec![Example {
                original: "Das Haus ist alt.".into(),
                translation: "La maison est vieille.".into(),
            }]
        );
    }

    #[test]
    fn test_definition_without_gender() {
        let definition = parse_definition("laufen verb to move swiftly on foot").unwrap();
        assert_eq!(definition.kind, "verb");
        assert_eq!(definition.definition, "to move swiftly on foot");
    }

    #[test]
    fn test_lookup_url_uses_codes() {
        let source = GlosbeSource::new(reqwest::Client::new(), "https://glosbe.com".into());
        assert_eq!(
            source.lookup_url("Haus", "de", "fr").unwrap(),
            "https://glosbe.com/de/fr/Haus"
        );
    }
}

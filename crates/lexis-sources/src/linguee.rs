use std::sync::LazyLock;

use async_trait::async_trait;
use lexis_translator::{DictionarySource, ProviderMetadata, SourceResult, TranslateError};
use scraper::{Html, Selector};

use crate::http::{element_text, fetch_page};
use crate::language_pair;

static FEATURED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.dictLink.featured").expect("valid selector"));

/// Linguee dictionary: several featured translations of one word
pub struct LingueeSource {
    client: reqwest::Client,
    base_url: String,
}

impl LingueeSource {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn lookup_url(&self, word: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let (src, tgt) = language_pair(from, to)?;
        Ok(format!(
            "{}/{}-{}/search?source={}&query={}",
            self.base_url.trim_end_matches('/'),
            src.slug,
            tgt.slug,
            src.slug,
            urlencoding::encode(word)
        ))
    }
}

#[async_trait]
impl DictionarySource for LingueeSource {
    async fn lookup(&self, word: &str, from: &str, to: &str) -> Result<SourceResult, TranslateError> {
        let url = self.lookup_url(word, from, to)?;
        let html = fetch_page(&self.client, &url).await?;
        Ok(parse_page(&html))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Linguee".to_string(),
            requires_api_key: false,
        }
    }
}

pub fn parse_page(html: &str) -> SourceResult {
    let document = Html::parse_document(html);
    let translations = document
        .select(&FEATURED)
        .map(|link| element_text(link, " "))
        .filter(|text| !text.is_empty())
        .collect();

    SourceResult {
        translations,
        ..SourceResult::default()
    }
}

use std::time::Duration;

use lexis_config::network::NetworkConfig;
use lexis_translator::TranslateError;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use scraper::ElementRef;

/// Shared client: fixed timeout, browser-like headers, no retries
pub fn build_client(config: &NetworkConfig) -> Result<reqwest::Client, TranslateError> {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&config.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, value);
    }

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    Ok(client)
}

/// GET a page and return its body, treating any non-2xx status as an error
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, TranslateError> {
    tracing::debug!("GET {}", url);
    let response = client.get(url).send().await?;

    if response.status() == 429 {
        return Err(TranslateError::RateLimitExceeded);
    }

    if !response.status().is_success() {
        return Err(TranslateError::ApiError(format!(
            "HTTP {}",
            response.status()
        )));
    }

    Ok(response.text().await?)
}

/// Text nodes of an element, trimmed, empties dropped, joined by `separator`
pub(crate) fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn test_element_text_strips_and_joins() {
        let html = Html::parse_fragment("<p>  das <b>Haus</b>\n ist <i> groß </i></p>");
        let selector = Selector::parse("p").unwrap();
        let p = html.select(&selector).next().unwrap();

        assert_eq!(element_text(p, " "), "das Haus ist groß");
        assert_eq!(element_text(p, ""), "dasHausistgroß");
    }

    #[test]
    fn test_client_builds_from_defaults() {
        assert!(build_client(&NetworkConfig::default()).is_ok());
    }
}

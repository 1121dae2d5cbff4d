use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::core::cache::QuoteCache;
use crate::core::quote::{GoldQuote, KaratPrice, QuoteProvider};
use crate::providers::util::with_retry;

// GoldApiProvider implementation for QuoteProvider, against the
// goldapi.io-style JSON endpoint: GET {base}/api/XAU/{currency} with the
// API key in an x-access-token header.
pub struct GoldApiProvider {
    base_url: String,
    api_key: String,
    cache: Arc<QuoteCache>,
}

impl GoldApiProvider {
    pub fn new(base_url: &str, api_key: &str, cache: Arc<QuoteCache>) -> Self {
        GoldApiProvider {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            cache,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoldApiResponse {
    price: f64,
    currency: String,
    timestamp: Option<i64>,
    price_gram_24k: Option<f64>,
    price_gram_22k: Option<f64>,
    price_gram_21k: Option<f64>,
    price_gram_18k: Option<f64>,
}

impl GoldApiResponse {
    fn gram_prices(&self) -> Vec<KaratPrice> {
        [
            ("24k", self.price_gram_24k),
            ("22k", self.price_gram_22k),
            ("21k", self.price_gram_21k),
            ("18k", self.price_gram_18k),
        ]
        .into_iter()
        .filter_map(|(karat, price)| {
            price.map(|price_per_gram| KaratPrice {
                karat,
                price_per_gram,
            })
        })
        .collect()
    }
}

#[async_trait]
impl QuoteProvider for GoldApiProvider {
    #[instrument(
        name = "GoldQuoteFetch",
        skip(self),
        fields(currency = %currency)
    )]
    async fn fetch_quote(&self, currency: &str) -> Result<GoldQuote> {
        if let Some(cached) = self.cache.get(currency).await {
            return Ok(cached);
        }

        let url = format!("{}/api/XAU/{}", self.base_url, currency);
        debug!("Requesting gold quote from {}", url);

        let client = reqwest::Client::builder().user_agent("aurum/0.1").build()?;
        let response = with_retry(
            || async {
                client
                    .get(&url)
                    .header("x-access-token", &self.api_key)
                    .send()
                    .await
            },
            3,
            500,
        )
        .await
        .with_context(|| format!("Failed to send quote request for currency: {currency}"))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} from quote service for currency: {}",
                response.status(),
                currency
            ));
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read quote response for currency: {currency}"))?;

        if text.trim().is_empty() {
            return Err(anyhow!(
                "Received empty response from quote service for currency: {}",
                currency
            ));
        }

        let data: GoldApiResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse quote response for {}: {}", currency, e))?;

        debug!(
            "Successfully fetched quote: {} {} per ounce",
            data.price, data.currency
        );

        let quote = GoldQuote {
            price_per_ounce: data.price,
            currency: data.currency.clone(),
            gram_prices: data.gram_prices(),
            timestamp: data
                .timestamp
                .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
        };

        self.cache.put(currency.to_string(), quote.clone()).await;

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(currency: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let request_path = format!("/api/XAU/{currency}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_quote_fetch() {
        let mock_response = r#"{
            "price": 1960.5,
            "currency": "USD",
            "timestamp": 1717286400,
            "price_gram_24k": 63.03,
            "price_gram_22k": 57.78,
            "price_gram_21k": 55.15,
            "price_gram_18k": 47.27
        }"#;

        let mock_server = create_mock_server("USD", mock_response).await;
        let cache = Arc::new(QuoteCache::new());

        let provider = GoldApiProvider::new(&mock_server.uri(), "test-key", cache);
        let quote = provider.fetch_quote("USD").await.unwrap();

        assert_eq!(quote.price_per_ounce, 1960.5);
        assert_eq!(quote.currency, "USD");
        assert_eq!(quote.gram_prices.len(), 4);
        assert_eq!(quote.gram_prices[0].karat, "24k");
        assert_eq!(quote.gram_prices[0].price_per_gram, 63.03);
        assert!(quote.timestamp.is_some());
    }

    #[tokio::test]
    async fn test_api_key_is_sent_as_access_token_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/XAU/USD"))
            .and(header("x-access-token", "secret-key"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"price": 1900.0, "currency": "USD"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider =
            GoldApiProvider::new(&mock_server.uri(), "secret-key", Arc::new(QuoteCache::new()));
        let quote = provider.fetch_quote("USD").await.unwrap();

        assert_eq!(quote.price_per_ounce, 1900.0);
        // No gram breakdown in the payload, so none in the quote
        assert!(quote.gram_prices.is_empty());
        assert!(quote.timestamp.is_none());
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/XAU/USD"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"price": 1950.0, "currency": "USD"}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider =
            GoldApiProvider::new(&mock_server.uri(), "test-key", Arc::new(QuoteCache::new()));

        let first = provider.fetch_quote("USD").await.unwrap();
        let second = provider.fetch_quote("USD").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_quote_service_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/XAU/USD"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let provider =
            GoldApiProvider::new(&mock_server.uri(), "bad-key", Arc::new(QuoteCache::new()));
        let result = provider.fetch_quote("USD").await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 403 Forbidden from quote service for currency: USD"
        );
    }

    #[tokio::test]
    async fn test_quote_service_malformed_response() {
        let mock_response = r#"{"prices": []}"#; // missing the price field

        let mock_server = create_mock_server("USD", mock_response).await;
        let provider =
            GoldApiProvider::new(&mock_server.uri(), "test-key", Arc::new(QuoteCache::new()));
        let result = provider.fetch_quote("USD").await;

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse quote response for USD")
        );
    }

    #[tokio::test]
    async fn test_quote_service_empty_response() {
        let mock_server = create_mock_server("USD", "").await;
        let provider =
            GoldApiProvider::new(&mock_server.uri(), "test-key", Arc::new(QuoteCache::new()));
        let result = provider.fetch_quote("USD").await;

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Received empty response from quote service for currency: USD"
        );
    }
}

//! CoinMarketCap quotes provider.
//!
//! Fetches latest quotes from the Pro API `/v1/cryptocurrency/quotes/latest`
//! endpoint, selecting coins by slug. The API key travels in the
//! `X-CMC_PRO_API_KEY` header.
//!
//! API documentation: https://coinmarketcap.com/api/documentation/v1/

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{Coin, QuotesLatest};
use crate::provider::QuotesProvider;

/// Default Pro API base URL
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1";

const PROVIDER_ID: &str = "COINMARKETCAP";
const QUOTES_LATEST_ENDPOINT: &str = "cryptocurrency/quotes/latest";
const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// Envelope error codes that mean the key was rejected: invalid, missing,
/// plan requires payment, payment expired, key required, plan not
/// authorized, key disabled.
const AUTH_ERROR_CODES: RangeInclusive<i64> = 1001..=1007;

/// Longest slice of an unparseable error body kept in error messages
const MAX_BODY_IN_ERROR: usize = 200;

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CoinMarketCap quotes provider.
pub struct CoinMarketCapProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for CoinMarketCapProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinMarketCapProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CoinMarketCapProvider {
    /// Create a provider for the given API key.
    ///
    /// An empty key is rejected up front instead of costing a request.
    pub fn new(api_key: String) -> Result<Self, MarketDataError> {
        if api_key.trim().is_empty() {
            return Err(MarketDataError::Unauthorized {
                provider: PROVIDER_ID.to_string(),
                message: "API key cannot be empty".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at another base URL (sandbox or proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl QuotesProvider for CoinMarketCapProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quotes(&self, slugs: &[String]) -> Result<BTreeMap<u64, Coin>, MarketDataError> {
        let url = format!("{}/{}", self.base_url, QUOTES_LATEST_ENDPOINT);
        let slug_param = slugs.join(",");

        debug!("CoinMarketCap request: {} for slugs [{}]", url, slug_param);

        let response = self
            .client
            .get(&url)
            .header("Accepts", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("slug", slug_param.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let quotes = parse_quotes_response(status, &body)?;
        debug!(
            "CoinMarketCap returned {} coins (elapsed {} ms, {} credits)",
            quotes.data.len(),
            quotes.status.elapsed,
            quotes.status.credit_count
        );
        if let Some(notice) = quotes.status.notice.as_deref() {
            warn!("CoinMarketCap notice: {}", notice);
        }

        Ok(quotes.data)
    }
}

/// Classify a quotes response into data or one of the error kinds.
///
/// The envelope's error code wins over the HTTP status when the body can be
/// decoded, since it carries the provider's own reason.
fn parse_quotes_response(status: StatusCode, body: &str) -> Result<QuotesLatest, MarketDataError> {
    let rejected = status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN;

    match serde_json::from_str::<QuotesLatest>(body) {
        Ok(quotes) => {
            if !quotes.status.is_ok() {
                return Err(envelope_error(
                    quotes.status.error_code,
                    quotes.status.error_message.as_deref(),
                ));
            }
            if rejected {
                return Err(MarketDataError::Unauthorized {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("HTTP {}", status),
                });
            }
            if !status.is_success() {
                return Err(MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("HTTP {}", status),
                });
            }
            Ok(quotes)
        }
        Err(_) if rejected => Err(MarketDataError::Unauthorized {
            provider: PROVIDER_ID.to_string(),
            message: format!("HTTP {}", status),
        }),
        Err(_) if !status.is_success() => Err(MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("HTTP {} - {}", status, truncate(body, MAX_BODY_IN_ERROR)),
        }),
        Err(e) => Err(MarketDataError::decode(PROVIDER_ID, e)),
    }
}

fn envelope_error(code: i64, message: Option<&str>) -> MarketDataError {
    let message = format!("error code {}: {}", code, message.unwrap_or("no message"));
    if AUTH_ERROR_CODES.contains(&code) {
        MarketDataError::Unauthorized {
            provider: PROVIDER_ID.to_string(),
            message,
        }
    } else {
        MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message,
        }
    }
}

fn truncate(body: &str, max: usize) -> &str {
    match body.char_indices().nth(max) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

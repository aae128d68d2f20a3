//! HTTP client for the Shopify Storefront GraphQL API.

mod catalog;
mod endpoint;

use std::time::Duration;

use quickview_core::{AppConfig, TokenKind};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorefrontError;
use crate::types::GraphQlResponse;

pub use endpoint::parse_endpoint;
// Re-export for test visibility via `use super::*`
#[cfg(test)]
use endpoint::extract_domain;

/// Largest page the Storefront API serves for `first:` arguments.
pub const MAX_PAGE_SIZE: u32 = 250;

/// Seconds to report when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP client for one shop's Storefront GraphQL endpoint.
///
/// Each call is a single POST with no retries. Rate limiting (429), other
/// non-2xx statuses, GraphQL `errors`, and missing `data` surface as typed
/// [`StorefrontError`]s. A `null` product or collection is `Ok(None)`.
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    token_header: &'static str,
    token: String,
}

impl std::fmt::Debug for StorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token_header", &self.token_header)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    operation_name: &'a str,
    variables: V,
}

impl StorefrontClient {
    /// Creates a client for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidEndpoint`] if the configured domain does
    ///   not form a valid endpoint URL.
    /// - [`StorefrontError::Http`] if the underlying `reqwest::Client`
    ///   cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, StorefrontError> {
        Self::with_endpoint(
            &config.storefront_endpoint(),
            config.storefront_token_kind,
            &config.storefront_access_token,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit endpoint URL (tests point this at a
    /// mock server).
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_endpoint(
        endpoint: &str,
        token_kind: TokenKind,
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StorefrontError> {
        let endpoint = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            token_header: token_kind.header_name(),
            token: token.to_owned(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Runs one GraphQL operation and returns its `data`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::RateLimited`] on HTTP 429.
    /// - [`StorefrontError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`StorefrontError::Http`] on network or TLS failure.
    /// - [`StorefrontError::Deserialize`] if the body does not match `T`.
    /// - [`StorefrontError::GraphQl`] if the response lists any errors.
    /// - [`StorefrontError::MissingData`] if `data` is absent or `null`.
    async fn execute<T, V>(
        &self,
        operation: &str,
        query: &str,
        variables: V,
    ) -> Result<T, StorefrontError>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let request = GraphQlRequest {
            query,
            operation_name: operation,
            variables,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(self.token_header, &self.token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

            return Err(StorefrontError::RateLimited {
                domain: endpoint::extract_domain(&self.endpoint),
                retry_after_secs,
            });
        }

        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<GraphQlResponse<T>>(&body).map_err(|e| {
            StorefrontError::Deserialize {
                context: format!(
                    "{operation} response from {}",
                    endpoint::extract_domain(&self.endpoint)
                ),
                source: e,
            }
        })?;

        if !parsed.errors.is_empty() {
            for error in &parsed.errors {
                tracing::warn!(
                    operation,
                    message = %error.message,
                    path = ?error.path,
                    "storefront GraphQL error"
                );
            }
            return Err(StorefrontError::GraphQl {
                operation: operation.to_owned(),
                messages: parsed.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        parsed.data.ok_or_else(|| StorefrontError::MissingData {
            operation: operation.to_owned(),
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;

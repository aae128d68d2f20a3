//! Endpoint validation and host extraction for the Storefront client.

use reqwest::Url;

use crate::error::StorefrontError;

/// Parses and validates the GraphQL endpoint URL.
///
/// Given `"https://example.myshopify.com/api/2025-01/graphql.json"`, returns
/// the parsed URL. Plain `http` is accepted so the client can talk to a local
/// mock server.
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidEndpoint`] if the string is not an
/// absolute `http(s)` URL with a host.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, StorefrontError> {
    let invalid = |reason: String| StorefrontError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_owned()));
    }
    Ok(url)
}

/// Hostname of the endpoint, for log fields and error messages.
pub(super) fn extract_domain(url: &Url) -> String {
    url.host_str()
        .map_or_else(|| url.to_string(), str::to_owned)
}

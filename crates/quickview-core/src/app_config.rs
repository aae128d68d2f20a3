use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which Storefront API token the configured secret is.
///
/// Public tokens travel in `X-Shopify-Storefront-Access-Token`; private
/// (server-side) tokens travel in `Shopify-Storefront-Private-Token`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Public,
    Private,
}

impl TokenKind {
    /// The HTTP header the Storefront API expects this token in.
    #[must_use]
    pub fn header_name(self) -> &'static str {
        match self {
            TokenKind::Public => "X-Shopify-Storefront-Access-Token",
            TokenKind::Private => "Shopify-Storefront-Private-Token",
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub store_domain: String,
    pub storefront_access_token: String,
    pub storefront_token_kind: TokenKind,
    pub storefront_api_version: String,
    pub collection_handle: String,
    pub collection_limit: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Storefront GraphQL endpoint for the configured shop and API version,
    /// e.g. `https://example.myshopify.com/api/2025-01/graphql.json`.
    #[must_use]
    pub fn storefront_endpoint(&self) -> String {
        let domain = self
            .store_domain
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!(
            "https://{domain}/api/{}/graphql.json",
            self.storefront_api_version
        )
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("store_domain", &self.store_domain)
            .field("storefront_access_token", &"[redacted]")
            .field("storefront_token_kind", &self.storefront_token_kind)
            .field("storefront_api_version", &self.storefront_api_version)
            .field("collection_handle", &self.collection_handle)
            .field("collection_limit", &self.collection_limit)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

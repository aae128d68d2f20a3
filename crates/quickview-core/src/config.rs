use crate::app_config::{AppConfig, Environment, TokenKind};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_num = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let store_domain = require("SHOPIFY_STORE_DOMAIN")?;
    let storefront_access_token = require("SHOPIFY_STOREFRONT_ACCESS_TOKEN")?;
    let storefront_token_kind =
        parse_token_kind(&or_default("SHOPIFY_STOREFRONT_TOKEN_KIND", "public"))?;
    let storefront_api_version = or_default("SHOPIFY_STOREFRONT_API_VERSION", "2025-01");

    let env = parse_environment(&or_default("QUICKVIEW_ENV", "development"))?;
    let bind_addr = parse_addr("QUICKVIEW_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("QUICKVIEW_LOG_LEVEL", "info");

    let collection_handle = or_default("QUICKVIEW_COLLECTION_HANDLE", "all");
    let raw_limit = parse_num("QUICKVIEW_COLLECTION_LIMIT", "12")?;
    let collection_limit = u32::try_from(raw_limit)
        .ok()
        .filter(|n| (1..=250).contains(n))
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "QUICKVIEW_COLLECTION_LIMIT".to_string(),
            reason: format!("must be between 1 and 250, got {raw_limit}"),
        })?;

    let request_timeout_secs = parse_num("QUICKVIEW_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "QUICKVIEW_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }
    let user_agent = or_default("QUICKVIEW_USER_AGENT", "quickview/0.1 (storefront)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        store_domain,
        storefront_access_token,
        storefront_token_kind,
        storefront_api_version,
        collection_handle,
        collection_limit,
        request_timeout_secs,
        user_agent,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "QUICKVIEW_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

fn parse_token_kind(s: &str) -> Result<TokenKind, ConfigError> {
    match s.to_ascii_lowercase().as_str() {
        "public" => Ok(TokenKind::Public),
        "private" => Ok(TokenKind::Private),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SHOPIFY_STOREFRONT_TOKEN_KIND".to_string(),
            reason: format!("expected public or private; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

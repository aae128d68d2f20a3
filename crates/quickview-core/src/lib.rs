pub mod app_config;
pub mod config;
pub mod format;
pub mod products;

pub use app_config::{AppConfig, Environment, TokenKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_price, format_price_range, image_alt, image_url, PLACEHOLDER_IMAGE_URL};
pub use products::{
    Collection, CollectionRef, Image, Money, PriceRange, Product, ProductOption, ProductSummary,
    ProductVariant, SelectedOption, SelectedOptions, ShopInfo,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

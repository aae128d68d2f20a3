pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod quick_view;
pub mod types;

pub use client::StorefrontClient;
pub use error::StorefrontError;
pub use normalize::{normalize_collection, normalize_product, normalize_summary};
pub use quick_view::{FetchTicket, ProductView, QuickView, QuickViewState};

//! Variant selection engine for the quick view.
//!
//! - [`availability`] decides whether an option value can still lead to an
//!   in-stock variant (partial match against the hypothetical selection).
//! - [`resolve`] finds the variant matching a full selection.
//! - [`selection`] owns the shopper's selection and keeps the derived state
//!   (resolved variant, price, image) consistent with it.
//! - [`display`] turns products and resolved variants into what the modal and
//!   the grid cards show.

pub mod availability;
pub mod display;
pub mod fingerprint;
pub mod resolve;
pub mod selection;

pub use availability::is_option_value_available;
pub use display::{
    can_add_to_bag, compare_at_display, display_price, gallery_images, ProductCard,
};
pub use fingerprint::CatalogFingerprint;
pub use resolve::resolve_variant;
pub use selection::{default_selection, OptionGroup, OptionPill, SelectionState, VariantSelection};

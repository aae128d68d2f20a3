//! Structural identity of a product's option/variant set.
//!
//! The selection manager resets its defaults only when this fingerprint
//! changes, so re-fetching identical catalog data keeps the shopper's choices.
//! Only the fields that influence defaults and availability are hashed:
//! option names and values, and each variant's id, `availableForSale` flag,
//! and option entries. Prices and images are not part of it.

use quickview_core::{ProductOption, ProductVariant};
use sha2::digest::Output;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogFingerprint(Output<Sha256>);

impl CatalogFingerprint {
    #[must_use]
    pub fn of(options: &[ProductOption], variants: &[ProductVariant]) -> Self {
        let mut hasher = Sha256::new();

        write_len(&mut hasher, options.len());
        for option in options {
            write_str(&mut hasher, &option.name);
            write_len(&mut hasher, option.values.len());
            for value in &option.values {
                write_str(&mut hasher, value);
            }
        }

        write_len(&mut hasher, variants.len());
        for variant in variants {
            write_str(&mut hasher, &variant.id);
            hasher.update([u8::from(variant.available_for_sale)]);
            write_len(&mut hasher, variant.selected_options.len());
            for entry in &variant.selected_options {
                write_str(&mut hasher, &entry.name);
                write_str(&mut hasher, &entry.value);
            }
        }

        Self(hasher.finalize())
    }

    /// Lowercase hex rendering, for logs.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }
}

// Length prefixes keep ("ab", "c") and ("a", "bc") from hashing alike.
fn write_len(hasher: &mut Sha256, len: usize) {
    hasher.update((len as u64).to_le_bytes());
}

fn write_str(hasher: &mut Sha256, s: &str) {
    write_len(hasher, s.len());
    hasher.update(s.as_bytes());
}

//! Display formatting for money and images.
//!
//! Prices are rendered the way an `en-US` storefront shows them: currency
//! symbol (or ISO code) prefix, the currency's minor-unit digits, thousands
//! grouping, and a leading minus for negatives. Anything that cannot be parsed
//! renders as an empty string rather than an error.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::products::{Image, Money};

/// Image shown when a product or variant has none.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder-image.svg";

/// Formats a money value for display, e.g. `$19.99`.
///
/// Returns an empty string when `money` is `None`, when the amount is not a
/// decimal, or when the currency code is not a three-letter ISO code.
#[must_use]
pub fn format_price(money: Option<&Money>) -> String {
    let Some(money) = money else {
        return String::new();
    };
    let Some(amount) = money.decimal() else {
        return String::new();
    };
    let Some(code) = normalize_currency_code(&money.currency_code) else {
        return String::new();
    };
    format_amount(amount, &code)
}

/// Formats a min/max price pair: a single price when both bounds are
/// numerically equal, otherwise `"{min} - {max}"`.
///
/// Returns an empty string when either bound is missing or unparseable.
#[must_use]
pub fn format_price_range(min: Option<&Money>, max: Option<&Money>) -> String {
    let (Some(min), Some(max)) = (min, max) else {
        return String::new();
    };
    let (Some(min_amount), Some(max_amount)) = (min.decimal(), max.decimal()) else {
        return String::new();
    };

    if min_amount == max_amount {
        return format_price(Some(min));
    }

    let low = format_price(Some(min));
    let high = format_price(Some(max));
    if low.is_empty() || high.is_empty() {
        return String::new();
    }
    format!("{low} - {high}")
}

/// URL of `image`, else `fallback`, else [`PLACEHOLDER_IMAGE_URL`].
#[must_use]
pub fn image_url(image: Option<&Image>, fallback: Option<&str>) -> String {
    image
        .map(|i| i.url.as_str())
        .filter(|u| !u.is_empty())
        .or(fallback.filter(|f| !f.is_empty()))
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
        .to_owned()
}

/// Alt text of `image`, else `fallback`.
#[must_use]
pub fn image_alt(image: Option<&Image>, fallback: &str) -> String {
    image
        .and_then(|i| i.alt_text.as_deref())
        .filter(|a| !a.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

fn normalize_currency_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

/// Symbol used in place of the ISO code, for currencies that have one in `en-US`.
fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "TWD" => "NT$",
        "ILS" => "₪",
        "VND" => "₫",
        "PHP" => "₱",
        "XCD" => "EC$",
        "XAF" => "FCFA",
        _ => return None,
    };
    Some(symbol)
}

/// Number of minor-unit digits shown for `code`.
fn currency_digits(code: &str) -> u32 {
    match code {
        "BIF" | "CLP" | "DJF" | "GNF" | "IQD" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
        | "UGX" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        "BHD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

fn format_amount(amount: Decimal, code: &str) -> String {
    let digits = currency_digits(code);
    let mut rounded = amount
        .abs()
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(digits);

    let plain = rounded.to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut number = group_thousands(int_part);
    if let Some(frac) = frac_part {
        number.push('.');
        number.push_str(frac);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    match currency_symbol(code) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{code}\u{a0}{number}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

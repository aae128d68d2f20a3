use serde_json::json;

use super::*;

fn product_json() -> serde_json::Value {
    json!({
        "id": "gid://shopify/Product/1",
        "handle": "linen-shirt",
        "title": "Linen Shirt",
        "description": "Breathable.",
        "descriptionHtml": "<p>Breathable.</p>",
        "vendor": "",
        "tags": ["summer"],
        "featuredImage": {
            "id": "gid://shopify/ProductImage/10",
            "url": "https://cdn.shopify.com/a.jpg",
            "altText": null,
            "width": 800,
            "height": 800
        },
        "images": { "nodes": [
            { "id": "gid://shopify/ProductImage/10", "url": "https://cdn.shopify.com/a.jpg", "altText": null, "width": 800, "height": 800 }
        ]},
        "options": [
            { "id": "gid://shopify/ProductOption/1", "name": "Size", "values": ["S", "M"] }
        ],
        "priceRange": {
            "minVariantPrice": { "amount": "40.0", "currencyCode": "USD" },
            "maxVariantPrice": { "amount": "40.0", "currencyCode": "USD" }
        },
        "compareAtPriceRange": {
            "minVariantPrice": { "amount": "0.0", "currencyCode": "USD" },
            "maxVariantPrice": { "amount": "0.0", "currencyCode": "USD" }
        },
        "variants": { "nodes": [
            {
                "id": "gid://shopify/ProductVariant/100",
                "title": "S",
                "availableForSale": true,
                "quantityAvailable": null,
                "price": { "amount": "40.0", "currencyCode": "USD" },
                "compareAtPrice": null,
                "selectedOptions": [{ "name": "Size", "value": "S" }],
                "image": null
            },
            {
                "id": "gid://shopify/ProductVariant/101",
                "title": "M",
                "availableForSale": false,
                "quantityAvailable": 0,
                "price": { "amount": "40.0", "currencyCode": "USD" },
                "compareAtPrice": null,
                "selectedOptions": [{ "name": "Size", "value": "M" }],
                "image": null
            }
        ]}
    })
}

fn parse_product(value: serde_json::Value) -> StorefrontProduct {
    serde_json::from_value(value).expect("fixture should deserialize")
}

#[test]
fn product_connections_are_flattened() {
    let product = normalize_product(parse_product(product_json())).unwrap();
    assert_eq!(product.handle, "linen-shirt");
    assert_eq!(product.images.len(), 1);
    assert_eq!(product.variants.len(), 2);
    assert_eq!(product.variants[1].quantity_available, Some(0));
    assert_eq!(product.options[0].values, ["S", "M"]);
}

#[test]
fn empty_vendor_becomes_none() {
    let product = normalize_product(parse_product(product_json())).unwrap();
    assert!(product.vendor.is_none());

    let mut json = product_json();
    json["vendor"] = json!("Acme");
    let product = normalize_product(parse_product(json)).unwrap();
    assert_eq!(product.vendor.as_deref(), Some("Acme"));
}

#[test]
fn duplicate_option_entry_is_rejected() {
    let mut json = product_json();
    json["variants"]["nodes"][0]["selectedOptions"] = json!([
        { "name": "Size", "value": "S" },
        { "name": "Size", "value": "M" }
    ]);

    let err = normalize_product(parse_product(json)).unwrap_err();
    assert!(
        matches!(
            &err,
            StorefrontError::Normalization { product_id, reason }
                if product_id == "gid://shopify/Product/1" && reason.contains("\"Size\"")
        ),
        "expected Normalization, got: {err:?}"
    );
}

#[test]
fn product_without_variants_normalizes() {
    let mut json = product_json();
    json["variants"] = json!({ "nodes": [] });
    let product = normalize_product(parse_product(json)).unwrap();
    assert!(product.variants.is_empty());
    assert!(!product.has_available_variants());
}

fn collection_json() -> serde_json::Value {
    json!({
        "id": "gid://shopify/Collection/1",
        "title": "All",
        "description": "",
        "products": { "nodes": [
            {
                "id": "gid://shopify/Product/1",
                "handle": "linen-shirt",
                "title": "Linen Shirt",
                "description": "",
                "featuredImage": null,
                "priceRange": {
                    "minVariantPrice": { "amount": "40.0", "currencyCode": "USD" },
                    "maxVariantPrice": { "amount": "45.0", "currencyCode": "USD" }
                },
                "compareAtPriceRange": {
                    "minVariantPrice": { "amount": "0.0", "currencyCode": "USD" },
                    "maxVariantPrice": { "amount": "0.0", "currencyCode": "USD" }
                },
                "options": [{ "name": "Size", "values": ["S", "M"] }],
                "variants": { "nodes": [{ "availableForSale": false }] }
            },
            {
                "id": "gid://shopify/Product/2",
                "handle": "gift-card",
                "title": "Gift Card",
                "description": "",
                "featuredImage": null,
                "priceRange": {
                    "minVariantPrice": { "amount": "25.0", "currencyCode": "USD" },
                    "maxVariantPrice": { "amount": "25.0", "currencyCode": "USD" }
                },
                "compareAtPriceRange": {
                    "minVariantPrice": { "amount": "0.0", "currencyCode": "USD" },
                    "maxVariantPrice": { "amount": "0.0", "currencyCode": "USD" }
                },
                "options": [],
                "variants": { "nodes": [] }
            }
        ]}
    })
}

#[test]
fn collection_products_become_summaries() {
    let collection: StorefrontCollection =
        serde_json::from_value(collection_json()).expect("fixture should deserialize");
    let collection = normalize_collection(collection);

    assert_eq!(collection.title, "All");
    assert_eq!(collection.products.len(), 2);
    assert_eq!(collection.products[0].first_variant_available, Some(false));
    assert_eq!(collection.products[1].first_variant_available, None);
    assert!(collection.products[0].options[0].id.is_none());
}

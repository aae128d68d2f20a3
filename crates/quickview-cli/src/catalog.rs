//! Grid and listing command handlers.

use quickview_storefront::StorefrontClient;
use quickview_variants::ProductCard;

use crate::render;

/// Print the product cards of collection `handle`.
///
/// # Errors
///
/// Returns an error if the collection does not exist or the request fails.
pub(crate) async fn run_grid(
    client: &StorefrontClient,
    handle: &str,
    limit: u32,
    json: bool,
) -> anyhow::Result<()> {
    let collection = client
        .fetch_collection(handle, limit)
        .await?
        .ok_or_else(|| anyhow::anyhow!("collection '{handle}' not found"))?;

    let cards: Vec<ProductCard> = collection
        .products
        .iter()
        .map(ProductCard::from_summary)
        .collect();
    tracing::info!(handle, count = cards.len(), "loaded collection grid");

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        print!("{}", render::render_grid(&collection.title, &cards));
    }
    Ok(())
}

/// Print `handle  title` for the first `first` collections.
///
/// # Errors
///
/// Returns an error if the request fails.
pub(crate) async fn run_collections(client: &StorefrontClient, first: u32) -> anyhow::Result<()> {
    let collections = client.fetch_collections(first).await?;
    if collections.is_empty() {
        println!("no collections");
        return Ok(());
    }
    for collection in &collections {
        println!("{:<32} {}", collection.handle, collection.title);
    }
    Ok(())
}

/// Print the shop's name and description.
///
/// # Errors
///
/// Returns an error if the request fails.
pub(crate) async fn run_shop(client: &StorefrontClient) -> anyhow::Result<()> {
    let shop = client.fetch_shop().await?;
    println!("{}", shop.name);
    if let Some(description) = shop.description.filter(|d| !d.is_empty()) {
        println!("{description}");
    }
    Ok(())
}

//! The `quick-view` command: load one product, apply option choices the way
//! a shopper clicking pills would, and print what the modal shows.

use quickview_storefront::{QuickView, QuickViewState, StorefrontClient};

use crate::render;

/// Load `handle`, apply `selections` in order, and print the result.
///
/// Choices of unavailable values are rejected with a warning and leave the
/// previous choice in place.
///
/// # Errors
///
/// Returns an error if the product does not exist or cannot be loaded.
pub(crate) async fn run_quick_view(
    client: &StorefrontClient,
    handle: &str,
    selections: &[(String, String)],
    json: bool,
) -> anyhow::Result<()> {
    let mut quick_view = QuickView::new();
    let ticket = quick_view.open(handle);
    let result = ticket.fetch(client).await;
    quick_view.complete(&ticket, result);

    match quick_view.state() {
        QuickViewState::NotFound { handle } => anyhow::bail!("product '{handle}' not found"),
        QuickViewState::Failed { handle, message } => {
            anyhow::bail!("failed to load product '{handle}': {message}")
        }
        _ => {}
    }

    let view = quick_view
        .view_mut()
        .ok_or_else(|| anyhow::anyhow!("quick view for '{handle}' did not load"))?;

    for (name, value) in selections {
        if !view.product.options.iter().any(|o| &o.name == name) {
            eprintln!("warning: '{handle}' has no option named '{name}'");
            continue;
        }
        if !view.selection.select_if_available(name, value) {
            tracing::warn!(option = %name, value = %value, "option value unavailable");
            eprintln!("warning: {name}={value} is not available; keeping current choice");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view.selection.state())?);
    } else {
        print!("{}", render::render_quick_view(&view.product, &view.selection));
    }
    Ok(())
}

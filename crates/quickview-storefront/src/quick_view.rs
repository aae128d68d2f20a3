//! The active product detail view.
//!
//! At most one product is open at a time. Each load is tracked by a
//! [`FetchTicket`]; opening another product, refreshing, or closing cancels
//! the outstanding ticket, and [`QuickView::complete`] ignores results for any
//! ticket that is cancelled or no longer current. The last request wins.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use quickview_core::Product;
use quickview_variants::VariantSelection;

use crate::client::StorefrontClient;
use crate::error::StorefrontError;

/// Handle to one in-flight product load.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    request_id: u64,
    handle: String,
    cancelled: Arc<AtomicBool>,
}

impl FetchTicket {
    #[must_use]
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Loads the ticket's product. Hand the result to [`QuickView::complete`].
    ///
    /// # Errors
    ///
    /// Propagates [`StorefrontClient::fetch_product_by_handle`] errors.
    pub async fn fetch(
        &self,
        client: &StorefrontClient,
    ) -> Result<Option<Product>, StorefrontError> {
        client.fetch_product_by_handle(&self.handle).await
    }
}

/// A loaded product and the shopper's selection on it.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product: Product,
    pub selection: VariantSelection,
}

#[derive(Debug, Clone, Default)]
pub enum QuickViewState {
    #[default]
    Closed,
    Loading {
        handle: String,
    },
    Ready(Box<ProductView>),
    NotFound {
        handle: String,
    },
    Failed {
        handle: String,
        message: String,
    },
}

#[derive(Debug, Default)]
pub struct QuickView {
    state: QuickViewState,
    in_flight: Option<FetchTicket>,
    next_request_id: u64,
}

impl QuickView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &QuickViewState {
        &self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.state, QuickViewState::Closed)
    }

    /// The loaded product view, when the state is `Ready`.
    #[must_use]
    pub fn view(&self) -> Option<&ProductView> {
        match &self.state {
            QuickViewState::Ready(view) => Some(&**view),
            _ => None,
        }
    }

    pub fn view_mut(&mut self) -> Option<&mut ProductView> {
        match &mut self.state {
            QuickViewState::Ready(view) => Some(&mut **view),
            _ => None,
        }
    }

    /// Opens `handle`, cancelling any outstanding load, and returns the ticket
    /// for the new load.
    ///
    /// Reopening the product that is already `Ready` is a [`Self::refresh`]:
    /// the view and the shopper's selection stay in place.
    pub fn open(&mut self, handle: &str) -> FetchTicket {
        if self.view().is_some_and(|view| view.product.handle == handle) {
            if let Some(ticket) = self.refresh() {
                return ticket;
            }
        }

        let ticket = self.issue_ticket(handle);
        tracing::debug!(handle, request_id = ticket.request_id, "opening quick view");
        self.state = QuickViewState::Loading {
            handle: handle.to_owned(),
        };
        ticket
    }

    /// Reloads the open product. A `Ready` view stays visible while the load
    /// runs. Returns `None` when nothing is open.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        let handle = match &self.state {
            QuickViewState::Closed => return None,
            QuickViewState::Loading { handle }
            | QuickViewState::NotFound { handle }
            | QuickViewState::Failed { handle, .. } => handle.clone(),
            QuickViewState::Ready(view) => view.product.handle.clone(),
        };

        let ticket = self.issue_ticket(&handle);
        tracing::debug!(handle = %handle, request_id = ticket.request_id, "refreshing quick view");
        if !matches!(self.state, QuickViewState::Ready(_)) {
            self.state = QuickViewState::Loading { handle };
        }
        Some(ticket)
    }

    /// Closes the view and cancels any outstanding load.
    pub fn close(&mut self) {
        self.cancel_in_flight();
        self.state = QuickViewState::Closed;
    }

    /// Applies the result of `ticket`'s load.
    ///
    /// Returns `false` and leaves the state untouched when the ticket was
    /// cancelled or superseded. A fresh product for an already `Ready` view of
    /// the same handle goes through [`VariantSelection::replace_catalog`], so
    /// the selection survives unless the catalog's structure changed.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Option<Product>, StorefrontError>,
    ) -> bool {
        let is_current = self
            .in_flight
            .as_ref()
            .is_some_and(|t| t.request_id == ticket.request_id);
        if ticket.is_cancelled() || !is_current {
            tracing::debug!(
                handle = %ticket.handle,
                request_id = ticket.request_id,
                "discarding stale quick view result"
            );
            return false;
        }
        self.in_flight = None;

        let handle = ticket.handle.clone();
        self.state = match result {
            Ok(Some(product)) => match std::mem::take(&mut self.state) {
                QuickViewState::Ready(mut view) if view.product.handle == product.handle => {
                    view.selection
                        .replace_catalog(product.options.clone(), product.variants.clone());
                    view.product = product;
                    QuickViewState::Ready(view)
                }
                _ => {
                    let selection = VariantSelection::for_product(&product);
                    QuickViewState::Ready(Box::new(ProductView { product, selection }))
                }
            },
            Ok(None) => {
                tracing::info!(handle = %handle, "quick view product not found");
                QuickViewState::NotFound { handle }
            }
            Err(e) => {
                tracing::error!(handle = %handle, error = %e, "quick view load failed");
                QuickViewState::Failed {
                    handle,
                    message: e.to_string(),
                }
            }
        };
        true
    }

    fn issue_ticket(&mut self, handle: &str) -> FetchTicket {
        self.cancel_in_flight();
        self.next_request_id += 1;
        let ticket = FetchTicket {
            request_id: self.next_request_id,
            handle: handle.to_owned(),
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        self.in_flight = Some(ticket.clone());
        ticket
    }

    fn cancel_in_flight(&mut self) {
        if let Some(ticket) = self.in_flight.take() {
            ticket.cancel();
        }
    }
}

#[cfg(test)]
#[path = "quick_view_test.rs"]
mod tests;

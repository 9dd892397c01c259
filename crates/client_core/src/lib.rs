//! Catalog core: configuration, the storefront catalog client, the pure view
//! pipeline, and the view state controller consumed by the presentation
//! layer.

use std::sync::Arc;

use shared::domain::{CatalogSnapshot, Product, SortField, ViewDirective};
use tracing::{error, info};

pub mod catalog;
pub mod config;
pub mod error;
pub mod pipeline;

pub use catalog::{CatalogSource, StorefrontClient, CATALOG_PAGE_SIZE};
pub use config::StorefrontConfig;
pub use error::{ConfigError, FetchError};
pub use pipeline::derive_view;

/// Fetch lifecycle as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Everything the presentation layer needs for one render pass.
///
/// `has_any_products` reports on the snapshot, not the view list, so an
/// empty view over a non-empty snapshot can render reset-your-filter
/// messaging distinctly from an empty catalog.
#[derive(Debug)]
pub struct ViewState<'a> {
    pub status: CatalogStatus,
    pub view_list: &'a [Product],
    pub directive: &'a ViewDirective,
    pub has_any_products: bool,
}

/// Orchestrates the fetch lifecycle and re-derives the view list after every
/// directive mutation.
///
/// State machine: `Idle -> Loading -> {Ready, Error}`. Failures never
/// propagate past the controller; they become the error status. No retry is
/// scheduled on failure.
pub struct CatalogController {
    source: Arc<dyn CatalogSource>,
    status: CatalogStatus,
    snapshot: CatalogSnapshot,
    directive: ViewDirective,
    view_list: Vec<Product>,
}

impl CatalogController {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            status: CatalogStatus::Idle,
            snapshot: CatalogSnapshot::empty(),
            directive: ViewDirective::default(),
            view_list: Vec::new(),
        }
    }

    /// Run the single catalog fetch of this controller's lifetime: exactly
    /// one awaited call, success replaces the snapshot wholesale, failure
    /// leaves no snapshot behind.
    pub async fn load(&mut self) {
        self.status = CatalogStatus::Loading;
        info!("catalog load started");

        match self.source.fetch_catalog().await {
            Ok(snapshot) => {
                info!(products = snapshot.len(), "catalog load finished");
                self.snapshot = snapshot;
                self.status = CatalogStatus::Ready;
                self.rederive();
            }
            Err(err) => {
                error!(error = %err, "catalog load failed");
                self.snapshot = CatalogSnapshot::empty();
                self.view_list.clear();
                self.status = CatalogStatus::Error;
            }
        }
    }

    /// Replace the search term; sort configuration is left untouched.
    pub fn on_search(&mut self, term: impl Into<String>) {
        self.directive.search_term = term.into();
        self.rederive();
    }

    /// Select a sort field. The order flips on every sort interaction, also
    /// when switching to a field that was not selected before.
    pub fn on_sort(&mut self, field: SortField) {
        self.directive.sort_field = field;
        self.directive.sort_order = self.directive.sort_order.toggled();
        self.rederive();
    }

    /// Clear the search term back to its default.
    pub fn on_reset_search(&mut self) {
        self.directive.search_term.clear();
        self.rederive();
    }

    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            status: self.status,
            view_list: &self.view_list,
            directive: &self.directive,
            has_any_products: !self.snapshot.is_empty(),
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    fn rederive(&mut self) {
        self.view_list = pipeline::derive_view(&self.snapshot, &self.directive);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

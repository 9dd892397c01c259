use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use client_core::{CatalogController, CatalogStatus, StorefrontClient, StorefrontConfig, ViewState};
use shared::domain::{SortField, SortOrder};

#[derive(Parser, Debug)]
#[command(about = "Browse a storefront product catalog from the terminal")]
struct Args {
    /// Storefront GraphQL endpoint; falls back to SHOP_URL.
    #[arg(long)]
    shop_url: Option<String>,
    /// Storefront access token; falls back to STOREFRONT_ACCESS_TOKEN.
    #[arg(long)]
    access_token: Option<String>,
    /// Keep only products whose title contains this term (case-insensitive).
    #[arg(long)]
    search: Option<String>,
    /// Sort column.
    #[arg(long, value_enum)]
    sort_by: Option<SortColumn>,
    /// Sort in descending order.
    #[arg(long)]
    descending: bool,
    /// Print the view list as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortColumn {
    Title,
    Price,
}

impl From<SortColumn> for SortField {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Title => SortField::Title,
            SortColumn::Price => SortField::Price,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let config = StorefrontConfig::resolve(args.shop_url, args.access_token)?;
    let client = StorefrontClient::new(config);
    let mut controller = CatalogController::new(Arc::new(client));

    controller.load().await;

    if let Some(term) = args.search {
        controller.on_search(term);
    }
    if let Some(column) = args.sort_by {
        let field = SortField::from(column);
        let wanted = if args.descending {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };
        // Each flag is one sort interaction; the order flips per click, so
        // click again when the first toggle lands on the wrong direction.
        controller.on_sort(field);
        if controller.view().directive.sort_order != wanted {
            controller.on_sort(field);
        }
    }

    render(&controller.view(), args.json)
}

fn render(view: &ViewState<'_>, as_json: bool) -> Result<()> {
    if view.status == CatalogStatus::Error {
        println!("Could not load products, try again later.");
        return Ok(());
    }

    if !view.has_any_products {
        println!("No products found, try again later.");
        return Ok(());
    }

    if view.view_list.is_empty() {
        println!(
            "No products match '{}'; reset your search filter.",
            view.directive.search_term
        );
        return Ok(());
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(view.view_list)?);
        return Ok(());
    }

    for product in view.view_list {
        let price = product.price.as_deref().unwrap_or("-");
        println!("{:<48} £{price}", product.title);
        if let Some(url) = &product.thumbnail_url {
            println!("    {url}");
        }
        if !product.description.is_empty() {
            println!("    {}", product.description);
        }
    }

    Ok(())
}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::domain::{CatalogSnapshot, Product, ProductId};
use tracing::{info, warn};

use crate::{config::StorefrontConfig, error::FetchError};

/// Number of products requested per fetch. The catalog is one bounded page;
/// there is no pagination.
pub const CATALOG_PAGE_SIZE: u32 = 50;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

const PRODUCTS_QUERY: &str = r#"
query getProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        description
        images(first: 1) {
          edges {
            node {
              originalSrc
            }
          }
        }
        variants(first: 1) {
          edges {
            node {
              price
            }
          }
        }
      }
    }
  }
}
"#;

/// Seam between the view state controller and the remote catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Issue exactly one bounded query and return the normalized snapshot.
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, FetchError>;
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: QueryVariables,
}

#[derive(Debug, Serialize)]
struct QueryVariables {
    first: u32,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ProductsData>,
    errors: Option<Vec<GraphQlMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
struct Connection<T> {
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
struct ProductNode {
    id: String,
    title: String,
    description: String,
    images: Connection<ImageNode>,
    variants: Connection<VariantNode>,
}

#[derive(Debug, Deserialize)]
struct ImageNode {
    #[serde(rename = "originalSrc")]
    original_src: String,
}

#[derive(Debug, Deserialize)]
struct VariantNode {
    price: String,
}

impl From<ProductNode> for Product {
    /// Normalize one raw node: the first listed image becomes the thumbnail,
    /// the first listed variant becomes the price. Absence of either stays
    /// `None`.
    fn from(node: ProductNode) -> Self {
        Self {
            id: ProductId(node.id),
            title: node.title,
            description: node.description,
            thumbnail_url: node
                .images
                .edges
                .into_iter()
                .next()
                .map(|edge| edge.node.original_src),
            price: node
                .variants
                .edges
                .into_iter()
                .next()
                .map(|edge| edge.node.price),
        }
    }
}

/// Catalog client for the storefront GraphQL endpoint.
pub struct StorefrontClient {
    http: Client,
    config: StorefrontConfig,
}

impl StorefrontClient {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CatalogSource for StorefrontClient {
    async fn fetch_catalog(&self) -> Result<CatalogSnapshot, FetchError> {
        info!(shop_url = self.config.shop_url(), "fetching product catalog");

        let response = self
            .http
            .post(self.config.shop_url())
            .header(ACCESS_TOKEN_HEADER, self.config.access_token())
            .json(&GraphQlRequest {
                query: PRODUCTS_QUERY,
                variables: QueryVariables {
                    first: CATALOG_PAGE_SIZE,
                },
            })
            .send()
            .await?
            .error_for_status()?;

        let envelope: GraphQlResponse = response
            .json()
            .await
            .map_err(|err| FetchError::Malformed(err.to_string()))?;

        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                let messages: Vec<String> =
                    errors.into_iter().map(|error| error.message).collect();
                warn!(?messages, "catalog query rejected by endpoint");
                return Err(FetchError::Query { messages });
            }
        }

        let data = envelope.data.ok_or_else(|| {
            FetchError::Malformed("response carries neither data nor errors".to_string())
        })?;

        let products: Vec<Product> = data
            .products
            .edges
            .into_iter()
            .map(|edge| Product::from(edge.node))
            .collect();

        info!(count = products.len(), "catalog fetch complete");
        Ok(CatalogSnapshot::new(products))
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;

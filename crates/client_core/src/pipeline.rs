use std::cmp::Ordering;

use shared::domain::{CatalogSnapshot, Product, SortField, SortOrder, ViewDirective};

/// Derive the ordered, filtered view list for one snapshot and directive.
///
/// Pure and deterministic: identical inputs yield element-for-element
/// identical output, and the snapshot is never mutated. The filter keeps
/// every product whose title contains the search term case-insensitively;
/// an empty term keeps everything.
pub fn derive_view(snapshot: &CatalogSnapshot, directive: &ViewDirective) -> Vec<Product> {
    let needle = directive.search_term.to_lowercase();

    let mut view: Vec<Product> = snapshot
        .products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // Stable sort, so equal keys keep their snapshot order.
    match directive.sort_field {
        SortField::Title => view.sort_by(|a, b| order_titles(a, b, directive.sort_order)),
        SortField::Price => view.sort_by(|a, b| order_prices(a, b, directive.sort_order)),
    }

    view
}

fn order_titles(a: &Product, b: &Product, order: SortOrder) -> Ordering {
    let ordering = a.title.cmp(&b.title);
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Numeric price ordering. Unparsable prices compare as `NAN` and land after
/// every parsable price, whatever order the directive asks for.
fn order_prices(a: &Product, b: &Product, order: SortOrder) -> Ordering {
    let (a, b) = (a.price_value(), b.price_value());
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;

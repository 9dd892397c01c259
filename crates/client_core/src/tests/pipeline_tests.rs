use super::*;
use shared::domain::ProductId;

fn product(id: &str, title: &str, price: Option<&str>) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        description: String::new(),
        thumbnail_url: None,
        price: price.map(str::to_string),
    }
}

fn mugs() -> CatalogSnapshot {
    CatalogSnapshot::new(vec![
        product("1", "Red Mug", Some("10")),
        product("2", "Blue Cup", Some("5")),
    ])
}

fn directive(term: &str, field: SortField, order: SortOrder) -> ViewDirective {
    ViewDirective {
        search_term: term.to_string(),
        sort_field: field,
        sort_order: order,
    }
}

fn titles(view: &[Product]) -> Vec<&str> {
    view.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn empty_search_term_keeps_every_product() {
    let view = derive_view(&mugs(), &ViewDirective::default());
    assert_eq!(view.len(), 2);
}

#[test]
fn search_matches_case_insensitive_substrings() {
    let view = derive_view(&mugs(), &directive("red", SortField::Title, SortOrder::Asc));
    assert_eq!(titles(&view), vec!["Red Mug"]);

    let view = derive_view(&mugs(), &directive("LUE CU", SortField::Title, SortOrder::Asc));
    assert_eq!(titles(&view), vec!["Blue Cup"]);
}

#[test]
fn unmatched_search_yields_empty_view() {
    let view = derive_view(&mugs(), &directive("xyz", SortField::Title, SortOrder::Asc));
    assert!(view.is_empty());
}

#[test]
fn empty_snapshot_yields_empty_view_for_any_directive() {
    let snapshot = CatalogSnapshot::empty();
    let view = derive_view(&snapshot, &directive("", SortField::Price, SortOrder::Desc));
    assert!(view.is_empty());
}

#[test]
fn title_sort_is_lexicographic_and_reversible() {
    let asc = derive_view(&mugs(), &directive("", SortField::Title, SortOrder::Asc));
    assert_eq!(titles(&asc), vec!["Blue Cup", "Red Mug"]);

    let desc = derive_view(&mugs(), &directive("", SortField::Title, SortOrder::Desc));
    assert_eq!(titles(&desc), vec!["Red Mug", "Blue Cup"]);
}

#[test]
fn price_sort_ascending_orders_cheapest_first() {
    let view = derive_view(&mugs(), &directive("", SortField::Price, SortOrder::Asc));
    assert_eq!(titles(&view), vec!["Blue Cup", "Red Mug"]);
}

#[test]
fn price_desc_exactly_reverses_parsable_prices() {
    let snapshot = CatalogSnapshot::new(vec![
        product("1", "Mid", Some("5")),
        product("2", "High", Some("10")),
        product("3", "Low", Some("3")),
    ]);

    let asc = derive_view(&snapshot, &directive("", SortField::Price, SortOrder::Asc));
    assert_eq!(titles(&asc), vec!["Low", "Mid", "High"]);

    let desc = derive_view(&snapshot, &directive("", SortField::Price, SortOrder::Desc));
    let mut reversed = asc.clone();
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn unparsable_prices_sort_last_in_both_directions() {
    let snapshot = CatalogSnapshot::new(vec![
        product("1", "Priced High", Some("10")),
        product("2", "No Price", None),
        product("3", "Bad Price", Some("free")),
        product("4", "Priced Low", Some("5")),
    ]);

    let asc = derive_view(&snapshot, &directive("", SortField::Price, SortOrder::Asc));
    assert_eq!(
        titles(&asc),
        vec!["Priced Low", "Priced High", "No Price", "Bad Price"]
    );

    let desc = derive_view(&snapshot, &directive("", SortField::Price, SortOrder::Desc));
    assert_eq!(
        titles(&desc),
        vec!["Priced High", "Priced Low", "No Price", "Bad Price"]
    );
}

#[test]
fn equal_keys_preserve_snapshot_order() {
    let snapshot = CatalogSnapshot::new(vec![
        product("1", "Mug", Some("5")),
        product("2", "Mug", Some("5")),
        product("3", "Mug", Some("5")),
    ]);

    for order in [SortOrder::Asc, SortOrder::Desc] {
        for field in [SortField::Title, SortField::Price] {
            let view = derive_view(&snapshot, &directive("", field, order));
            let ids: Vec<&str> = view.iter().map(|p| p.id.0.as_str()).collect();
            assert_eq!(ids, vec!["1", "2", "3"]);
        }
    }
}

#[test]
fn derive_view_is_deterministic_across_calls() {
    let snapshot = mugs();
    let directive = directive("u", SortField::Price, SortOrder::Desc);

    let first = derive_view(&snapshot, &directive);
    let second = derive_view(&snapshot, &directive);
    assert_eq!(first, second);
}

#[test]
fn derive_view_leaves_the_snapshot_untouched() {
    let snapshot = mugs();
    let before = snapshot.clone();

    let _ = derive_view(&snapshot, &directive("red", SortField::Price, SortOrder::Desc));
    assert_eq!(snapshot, before);
}

//! Registry and search properties checked against the built-in catalog

use std::collections::HashSet;

use devformat_core::{ToolCategory, search};
use devformat_tools::{BUILTIN_COUNT, builtin_registry};
use pretty_assertions::assert_eq;

#[test]
fn test_ids_and_routes_are_unique() {
    let registry = builtin_registry().unwrap();
    assert_eq!(registry.len(), BUILTIN_COUNT);

    let ids: HashSet<&str> = registry.iter().map(|t| t.id()).collect();
    let routes: HashSet<&str> = registry
        .iter()
        .map(|t| t.definition().route.as_str())
        .collect();
    assert_eq!(ids.len(), registry.len());
    assert_eq!(routes.len(), registry.len());
}

#[test]
fn test_by_category_is_exact_ordered_subset() {
    let registry = builtin_registry().unwrap();
    for category in ToolCategory::ALL {
        let expected: Vec<&str> = registry
            .iter()
            .filter(|t| t.definition().category == category)
            .map(|t| t.id())
            .collect();
        let actual: Vec<&str> = registry
            .by_category(category)
            .into_iter()
            .map(|t| t.id())
            .collect();
        assert_eq!(actual, expected, "category {category}");
        assert!(!actual.is_empty(), "category {category} is empty");
    }
}

#[test]
fn test_route_table_matches_registry_order() {
    let registry = builtin_registry().unwrap();
    let routes = registry.routes();
    let ids: Vec<&str> = registry.iter().map(|t| t.id()).collect();
    let route_ids: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(route_ids, ids);

    for entry in &routes {
        let tool = registry.by_route(&entry.route).unwrap();
        assert_eq!(tool.id(), entry.id);
        assert_eq!(registry.resolve(&entry.route).unwrap().id(), entry.id);
        assert_eq!(registry.resolve(&entry.id).unwrap().id(), entry.id);
    }
}

#[test]
fn test_empty_search_returns_whole_catalog() {
    let registry = builtin_registry().unwrap();
    let all = search(&registry, "");
    assert_eq!(all.len(), registry.len());

    for query in ["json", "HASH", "  url ", "generators", "yaml", "nothing-like-this"] {
        let found = search(&registry, query).ids();
        assert!(found.iter().all(|id| all.ids().contains(id)), "query {query:?}");
    }
}

#[test]
fn test_search_membership_on_real_metadata() {
    let registry = builtin_registry().unwrap();
    for query in ["json", "escape", "hash", "converters", "random", "xml"] {
        let found = search(&registry, query).ids();
        for tool in registry.iter() {
            let def = tool.definition();
            let expected = def.name.to_lowercase().contains(query)
                || def.description.to_lowercase().contains(query)
                || def.category.as_str().contains(query)
                || def.keywords.iter().any(|k| k.to_lowercase().contains(query));
            assert_eq!(
                found.contains(&def.id),
                expected,
                "tool {} for query {query:?}",
                def.id
            );
        }
    }
}

#[test]
fn test_unknown_lookup_is_none() {
    let registry = builtin_registry().unwrap();
    assert!(registry.get("does-not-exist").is_none());
    assert!(registry.by_route("/formatters/nope").is_none());
}

//! Query matching and category grouping.

use super::highlight::{find_ci, fold_case};
use crate::registry::ToolRegistry;
use crate::tool::{Tool, ToolCategory};
use std::sync::Arc;

/// Normalize a raw query: trimmed and case-folded the way the highlighter folds.
pub fn normalize_query(query: &str) -> String {
    fold_case(query.trim())
}

fn contains_ci(text: &str, needle: &str) -> bool {
    find_ci(text, needle).is_some()
}

/// Whether `tool` matches `query`.
///
/// A blank query matches everything. Otherwise the normalized query must be a
/// substring of the name, description, category or one of the keywords.
pub fn matches(tool: &dyn Tool, query: &str) -> bool {
    let q = normalize_query(query);
    if q.is_empty() {
        return true;
    }
    let def = tool.definition();
    contains_ci(&def.name, &q)
        || contains_ci(&def.description, &q)
        || contains_ci(def.category.as_str(), &q)
        || def.keywords.iter().any(|k| contains_ci(k, &q))
}

/// Matches from one category.
#[derive(Clone)]
pub struct SearchGroup {
    pub category: ToolCategory,
    pub tools: Vec<Arc<dyn Tool>>,
}

/// Grouped search results.
///
/// Groups follow the fixed category display order and contain tools in
/// registry order. Categories without matches are omitted.
#[derive(Clone, Default)]
pub struct SearchResults {
    query: String,
    groups: Vec<SearchGroup>,
}

impl SearchResults {
    /// The normalized query these results were computed for.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn groups(&self) -> &[SearchGroup] {
        &self.groups
    }

    /// Ids of all matches in flattened order.
    pub fn ids(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|g| g.tools.iter().map(|t| t.id().to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.tools.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Match at a flattened index.
    pub fn get(&self, index: usize) -> Option<&Arc<dyn Tool>> {
        self.groups.iter().flat_map(|g| g.tools.iter()).nth(index)
    }
}

/// Search the registry.
pub fn search(registry: &ToolRegistry, query: &str) -> SearchResults {
    let q = normalize_query(query);
    let groups = registry
        .categories()
        .into_iter()
        .filter_map(|category| {
            let tools: Vec<Arc<dyn Tool>> = registry
                .by_category(category)
                .into_iter()
                .filter(|t| matches(t.as_ref(), &q))
                .cloned()
                .collect();
            (!tools.is_empty()).then_some(SearchGroup { category, tools })
        })
        .collect();

    SearchResults { query: q, groups }
}

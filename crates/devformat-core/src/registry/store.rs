//! Tool registry storage

use crate::error::{Error, Result};
use crate::tool::{Tool, ToolCategory};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub id: String,
    pub route: String,
}

/// Ordered, immutable collection of tools.
///
/// Insertion order is preserved everywhere: iteration, category grouping and
/// the route table all follow the order tools were handed to [`ToolRegistry::new`].
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_id: HashMap<String, usize>,
    by_route: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build a registry, rejecting duplicate ids and routes.
    pub fn new(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Result<Self> {
        let mut registry = Self::default();
        for tool in tools {
            registry.insert(tool)?;
        }
        tracing::debug!(count = registry.len(), "tool registry built");
        Ok(registry)
    }

    fn insert(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let def = tool.definition();
        if self.by_id.contains_key(&def.id) {
            return Err(Error::DuplicateId { id: def.id.clone() });
        }
        if let Some(&existing) = self.by_route.get(&def.route) {
            return Err(Error::DuplicateRoute {
                route: def.route.clone(),
                first: self.tools[existing].definition().id.clone(),
                second: def.id.clone(),
            });
        }

        let index = self.tools.len();
        self.by_id.insert(def.id.clone(), index);
        self.by_route.insert(def.route.clone(), index);
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by id.
    pub fn get(&self, id: &str) -> Option<&Arc<dyn Tool>> {
        self.by_id.get(id).map(|&i| &self.tools[i])
    }

    /// Look up a tool by its route.
    pub fn by_route(&self, route: &str) -> Option<&Arc<dyn Tool>> {
        self.by_route.get(route).map(|&i| &self.tools[i])
    }

    /// Look up a tool by id, falling back to route.
    pub fn resolve(&self, id_or_route: &str) -> Option<&Arc<dyn Tool>> {
        self.get(id_or_route).or_else(|| self.by_route(id_or_route))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The fixed category list in display order.
    pub fn categories(&self) -> [ToolCategory; 6] {
        ToolCategory::ALL
    }

    /// Tools in a category, in registry order.
    pub fn by_category(&self, category: ToolCategory) -> Vec<&Arc<dyn Tool>> {
        self.tools
            .iter()
            .filter(|t| t.definition().category == category)
            .collect()
    }

    /// Iterate over all tools in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    /// `(id, route)` pairs in registry order.
    pub fn routes(&self) -> Vec<RouteEntry> {
        self.tools
            .iter()
            .map(|t| RouteEntry {
                id: t.definition().id.clone(),
                route: t.definition().route.clone(),
            })
            .collect()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tools.iter().map(|t| &t.definition().id))
            .finish()
    }
}

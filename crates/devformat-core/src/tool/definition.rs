//! Static metadata describing a tool.

use super::types::{ToolCategory, ToolMode};
use serde::Serialize;

/// Everything about a tool except how it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    /// Stable unique identifier (e.g., "json-formatter")
    pub id: String,
    /// Display name (e.g., "JSON Formatter")
    pub name: String,
    pub description: String,
    pub category: ToolCategory,
    /// Unique navigation path (e.g., "/formatters/json")
    pub route: String,
    /// Syntax-highlighting hint for editors
    pub language: String,
    /// Canned input seeded by "load sample"
    pub sample_input: String,
    pub keywords: Vec<String>,
    pub mode: ToolMode,
}

impl ToolDefinition {
    /// Create a transform-mode definition with the route derived from
    /// category and slug.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ToolCategory,
        slug: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            route: format!("/{}/{}", category.as_str(), slug),
            language: "text".to_string(),
            sample_input: String::new(),
            keywords: Vec::new(),
            mode: ToolMode::Transform,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_sample(mut self, sample: impl Into<String>) -> Self {
        self.sample_input = sample.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mode(mut self, mode: ToolMode) -> Self {
        self.mode = mode;
        self
    }

    /// Page title used by the shell.
    pub fn page_title(&self) -> String {
        format!("{} - Free Online Tool", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_derived_from_category() {
        let def = ToolDefinition::new("md5-generator", "MD5 Hash Generator", ToolCategory::Encoders, "md5");
        assert_eq!(def.route, "/encoders/md5");
        assert_eq!(def.mode, ToolMode::Transform);
        assert_eq!(def.language, "text");
    }

    #[test]
    fn test_builder() {
        let def = ToolDefinition::new("uuid-generator", "UUID Generator", ToolCategory::Generators, "uuid")
            .with_mode(ToolMode::Generate)
            .with_sample("5")
            .with_keywords(["uuid", "guid"]);
        assert_eq!(def.mode, ToolMode::Generate);
        assert_eq!(def.sample_input, "5");
        assert_eq!(def.keywords, vec!["uuid", "guid"]);
    }

    #[test]
    fn test_page_title() {
        let def = ToolDefinition::new("json-formatter", "JSON Formatter", ToolCategory::Formatters, "json");
        assert_eq!(def.page_title(), "JSON Formatter - Free Online Tool");
    }
}

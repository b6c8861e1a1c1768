//! Keyboard-driven search palette.
//!
//! Holds the query and a selection cursor over the flattened match list.
//! The cursor clamps at both ends. Confirming yields a navigation target and
//! closes the palette; cancelling closes it and throws the query away.

use super::matcher::{SearchResults, search};
use crate::registry::ToolRegistry;
use serde::Serialize;

/// Keys the palette understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    /// Global open/close shortcut
    Toggle,
}

/// Where to go after a confirmed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub id: String,
    pub route: String,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteEvent {
    /// Nothing changed
    None,
    Opened,
    /// Cursor moved to the given index
    Moved(usize),
    Navigate(Navigation),
    Closed,
}

/// Search palette state over a shared registry.
pub struct SearchPalette<'r> {
    registry: &'r ToolRegistry,
    open: bool,
    query: String,
    cursor: usize,
    results: SearchResults,
}

impl<'r> SearchPalette<'r> {
    /// Create a closed palette.
    pub fn new(registry: &'r ToolRegistry) -> Self {
        Self {
            registry,
            open: false,
            query: String::new(),
            cursor: 0,
            results: search(registry, ""),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Open with an empty query and the cursor on the first entry.
    pub fn open(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Global shortcut: open when closed, cancel when open.
    pub fn toggle(&mut self) -> PaletteEvent {
        if self.open {
            self.cancel();
            PaletteEvent::Closed
        } else {
            self.open();
            PaletteEvent::Opened
        }
    }

    /// Replace the query, recompute matches and reset the cursor.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.results = search(self.registry, &self.query);
        self.cursor = 0;
    }

    pub fn move_down(&mut self) -> usize {
        let last = self.results.len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
        self.cursor
    }

    pub fn move_up(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor
    }

    /// Move the cursor directly, e.g. on pointer hover. Out-of-range indexes
    /// are clamped.
    pub fn select(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.results.len().saturating_sub(1));
        self.cursor
    }

    /// The currently selected navigation target.
    pub fn selected(&self) -> Option<Navigation> {
        self.results.get(self.cursor).map(|tool| {
            let def = tool.definition();
            Navigation {
                id: def.id.clone(),
                route: def.route.clone(),
            }
        })
    }

    /// Confirm the selection: close and return the target.
    ///
    /// Returns `None` and stays open when nothing matches.
    pub fn confirm(&mut self) -> Option<Navigation> {
        let target = self.selected()?;
        tracing::debug!(id = %target.id, route = %target.route, "palette navigation");
        self.open = false;
        self.reset();
        Some(target)
    }

    /// Close without navigating and discard the query.
    pub fn cancel(&mut self) {
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.results = search(self.registry, "");
        }
        self.cursor = 0;
    }

    /// Dispatch one key press.
    pub fn handle_key(&mut self, key: Key) -> PaletteEvent {
        match key {
            Key::Toggle => self.toggle(),
            _ if !self.open => PaletteEvent::None,
            Key::Down => PaletteEvent::Moved(self.move_down()),
            Key::Up => PaletteEvent::Moved(self.move_up()),
            Key::Enter => self
                .confirm()
                .map_or(PaletteEvent::None, PaletteEvent::Navigate),
            Key::Escape => {
                self.cancel();
                PaletteEvent::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::{FnTool, Tool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
    use std::sync::Arc;

    fn noop(_input: &str, _options: &ToolOptions) -> ToolResult {
        ToolResult::success("")
    }

    fn registry() -> ToolRegistry {
        let tools: Vec<Arc<dyn Tool>> = [
            ("a", ToolCategory::Formatters),
            ("b", ToolCategory::Encoders),
            ("c", ToolCategory::Encoders),
        ]
        .into_iter()
        .map(|(id, cat)| {
            Arc::new(FnTool::new(ToolDefinition::new(id, id, cat, id), noop)) as Arc<dyn Tool>
        })
        .collect();
        ToolRegistry::new(tools).unwrap()
    }

    #[test]
    fn test_starts_closed() {
        let registry = registry();
        let palette = SearchPalette::new(&registry);
        assert!(!palette.is_open());
        assert_eq!(palette.cursor(), 0);
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        palette.open();

        assert_eq!(palette.handle_key(Key::Up), PaletteEvent::Moved(0));
        assert_eq!(palette.handle_key(Key::Down), PaletteEvent::Moved(1));
        assert_eq!(palette.handle_key(Key::Down), PaletteEvent::Moved(2));
        assert_eq!(palette.handle_key(Key::Down), PaletteEvent::Moved(2));
    }

    #[test]
    fn test_enter_navigates_and_closes() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        palette.open();
        palette.move_down();

        let event = palette.handle_key(Key::Enter);
        assert_eq!(
            event,
            PaletteEvent::Navigate(Navigation {
                id: "b".into(),
                route: "/encoders/b".into(),
            })
        );
        assert!(!palette.is_open());
    }

    #[test]
    fn test_escape_discards_query() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        palette.open();
        palette.set_query("encoders");
        palette.move_down();
        assert_eq!(palette.results().len(), 2);

        assert_eq!(palette.handle_key(Key::Escape), PaletteEvent::Closed);
        assert!(!palette.is_open());

        palette.open();
        assert_eq!(palette.query(), "");
        assert_eq!(palette.cursor(), 0);
        assert_eq!(palette.results().len(), 3);
    }

    #[test]
    fn test_enter_with_no_matches_stays_open() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        palette.open();
        palette.set_query("zzz");
        assert_eq!(palette.handle_key(Key::Down), PaletteEvent::Moved(0));
        assert_eq!(palette.handle_key(Key::Enter), PaletteEvent::None);
        assert!(palette.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        assert_eq!(palette.handle_key(Key::Down), PaletteEvent::None);
        assert_eq!(palette.handle_key(Key::Enter), PaletteEvent::None);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        assert_eq!(palette.handle_key(Key::Toggle), PaletteEvent::Opened);
        palette.set_query("b");
        assert_eq!(palette.handle_key(Key::Toggle), PaletteEvent::Closed);
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_set_query_resets_cursor() {
        let registry = registry();
        let mut palette = SearchPalette::new(&registry);
        palette.open();
        palette.select(2);
        palette.set_query("");
        assert_eq!(palette.cursor(), 0);
    }
}

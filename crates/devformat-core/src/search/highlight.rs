//! Display-only emphasis of the first query occurrence in a field.

use std::ops::Range;

/// A field split around the first case-insensitive occurrence of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub before: &'a str,
    /// Empty when the field has no occurrence
    pub matched: &'a str,
    pub after: &'a str,
}

impl<'a> Highlight<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            before: text,
            matched: "",
            after: "",
        }
    }

    pub fn is_match(&self) -> bool {
        !self.matched.is_empty()
    }

    /// Render with the match wrapped by `open`/`close` markers.
    pub fn render(&self, open: &str, close: &str) -> String {
        self.render_with(|m| format!("{open}{m}{close}"))
    }

    /// Render with the match passed through `mark`.
    pub fn render_with<F, D>(&self, mark: F) -> String
    where
        F: FnOnce(&'a str) -> D,
        D: std::fmt::Display,
    {
        if !self.is_match() {
            return self.before.to_string();
        }
        format!("{}{}{}", self.before, mark(self.matched), self.after)
    }
}

/// Per-character lower-casing shared by matching and highlighting.
///
/// Unlike `str::to_lowercase` this has no final-sigma rule, so a folded
/// query lines up with `find_ci`'s character-by-character comparison.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Byte range of the first case-insensitive occurrence of `needle`.
pub fn find_ci(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = fold_case(needle).chars().collect();
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut pending = needle.iter();
        let mut end = start;
        let mut matched = false;
        'chars: for (offset, c) in haystack[start..].char_indices() {
            for lower in c.to_lowercase() {
                match pending.next() {
                    Some(&want) if want == lower => {}
                    _ => break 'chars,
                }
            }
            end = start + offset + c.len_utf8();
            if pending.len() == 0 {
                matched = true;
                break;
            }
        }
        if matched {
            return Some(start..end);
        }
    }
    None
}

/// Split `text` around the first occurrence of the trimmed `query`.
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlight<'a> {
    match find_ci(text, query.trim()) {
        Some(range) => Highlight {
            before: &text[..range.start],
            matched: &text[range.clone()],
            after: &text[range.end..],
        },
        None => Highlight::plain(text),
    }
}

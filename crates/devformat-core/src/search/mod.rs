//! Search over the registry: matching, grouping, highlighting and the
//! keyboard palette.

mod highlight;
mod matcher;
mod palette;

pub use highlight::{Highlight, find_ci, fold_case, highlight};
pub use matcher::{SearchGroup, SearchResults, matches, normalize_query, search};
pub use palette::{Key, Navigation, PaletteEvent, SearchPalette};

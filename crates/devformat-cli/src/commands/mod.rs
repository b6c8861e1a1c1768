//! Command implementations for devformat-cli

pub mod list;
pub mod palette;
pub mod prefs;
pub mod run;
pub mod search;

pub use list::{run_list, run_routes};
pub use palette::run_palette;
pub use prefs::{PrefsUpdate, run_prefs};
pub use run::{InputSource, run_tool};
pub use search::{run_search, run_show};

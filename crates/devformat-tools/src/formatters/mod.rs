//! Re-indenting pretty printers.

pub mod html;
pub mod json;
pub mod sql;
pub mod xml;

pub use html::html_formatter;
pub use json::json_formatter;
pub use sql::sql_formatter;
pub use xml::xml_formatter;

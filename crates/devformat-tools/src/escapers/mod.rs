//! Escape/unescape pairs. Each tool prints both directions.

pub mod html;
pub mod json;
pub mod regex;
pub mod sql;
pub mod xml;

pub use html::html_escaper;
pub use json::json_escaper;
pub use regex::regex_escaper;
pub use sql::sql_escaper;
pub use xml::xml_escaper;

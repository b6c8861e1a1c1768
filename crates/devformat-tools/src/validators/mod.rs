//! Syntax and structure checkers.

pub mod html;
pub mod json;
pub mod sql;
pub mod xml;

pub use html::html_validator;
pub use json::json_validator;
pub use sql::sql_validator;
pub use xml::xml_validator;

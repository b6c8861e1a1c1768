//! Format and notation converters.

pub mod json_csv;
pub mod json_yaml;
pub mod number_base;
pub mod text_case;

pub use json_csv::json_csv_converter;
pub use json_yaml::json_yaml_converter;
pub use number_base::number_base_converter;
pub use text_case::text_case_converter;

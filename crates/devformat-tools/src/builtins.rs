//! Built-in catalog - single source of truth for which tools exist and in
//! which order they are listed.

use crate::{converters, encoders, escapers, formatters, generators, validators};
use devformat_core::{Result, Tool, ToolRegistry};
use std::sync::Arc;

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 28;

/// All built-in tools in registry order.
pub fn builtin_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        // Formatters (4)
        Arc::new(formatters::json_formatter()),
        Arc::new(formatters::xml_formatter()),
        Arc::new(formatters::html_formatter()),
        Arc::new(formatters::sql_formatter()),
        // Validators (4)
        Arc::new(validators::json_validator()),
        Arc::new(validators::xml_validator()),
        Arc::new(validators::html_validator()),
        Arc::new(validators::sql_validator()),
        // Encoders (6)
        Arc::new(encoders::base64_encoder()),
        Arc::new(encoders::url_encoder()),
        Arc::new(encoders::html_entities_encoder()),
        Arc::new(encoders::jwt_decoder()),
        Arc::new(encoders::md5_generator()),
        Arc::new(encoders::sha256_generator()),
        // Escapers (5)
        Arc::new(escapers::json_escaper()),
        Arc::new(escapers::xml_escaper()),
        Arc::new(escapers::html_escaper()),
        Arc::new(escapers::sql_escaper()),
        Arc::new(escapers::regex_escaper()),
        // Generators (5)
        Arc::new(generators::lorem_ipsum_generator()),
        Arc::new(generators::uuid_generator()),
        Arc::new(generators::password_generator()),
        Arc::new(generators::color_generator()),
        Arc::new(generators::timestamp_converter()),
        // Converters (4)
        Arc::new(converters::json_yaml_converter()),
        Arc::new(converters::json_csv_converter()),
        Arc::new(converters::number_base_converter()),
        Arc::new(converters::text_case_converter()),
    ]
}

/// Build the registry holding the built-in catalog.
pub fn builtin_registry() -> Result<ToolRegistry> {
    let registry = ToolRegistry::new(builtin_tools())?;
    tracing::debug!(tools = registry.len(), "Built-in registry ready");
    Ok(registry)
}

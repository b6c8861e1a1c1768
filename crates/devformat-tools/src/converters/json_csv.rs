//! JSON array <-> CSV converter

use crate::formatters::json::to_indented_string;
use devformat_core::{FnTool, ToolCategory, ToolDefinition, ToolOptions, ToolResult};
use serde_json::{Map, Value};

pub fn json_csv_converter() -> FnTool {
    FnTool::new(
        ToolDefinition::new(
            "json-csv-converter",
            "JSON to CSV Converter",
            ToolCategory::Converters,
            "json-csv",
        )
        .with_description(
            "Convert between JSON arrays and CSV format. Paste a JSON array to get CSV, or CSV to get JSON.",
        )
        .with_language("json")
        .with_keywords(["json", "csv", "convert", "spreadsheet", "table", "export", "import", "data"])
        .with_sample(
            r#"[
  { "name": "Alice", "age": 30, "city": "New York" },
  { "name": "Bob", "age": 25, "city": "San Francisco" },
  { "name": "Charlie", "age": 35, "city": "Chicago" }
]"#,
        ),
        run,
    )
}

fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_to_csv(items: &[Value]) -> Result<String, String> {
    if items.is_empty() {
        return Err("Input must be a non-empty JSON array of objects".to_string());
    }
    let objects: Vec<&Map<String, Value>> = items
        .iter()
        .map(|item| item.as_object().ok_or("Each array element must be a flat object"))
        .collect::<Result<_, _>>()?;

    let mut headers: Vec<&str> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let mut rows = vec![headers.iter().map(|h| csv_field(h)).collect::<Vec<_>>().join(",")];
    for object in objects {
        let row: Vec<String> = headers
            .iter()
            .map(|h| csv_field(&cell(object.get(*h))))
            .collect();
        rows.push(row.join(","));
    }
    Ok(rows.join("\n"))
}

/// Split one CSV line; `""` inside quotes is a literal quote.
fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match (in_quotes, c) {
            (true, '"') if chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            (true, '"') => in_quotes = false,
            (false, '"') => in_quotes = true,
            (false, ',') => fields.push(std::mem::take(&mut current)),
            (_, c) => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn csv_to_json(csv: &str) -> Result<String, String> {
    let lines: Vec<&str> = csv.split('\n').filter(|l| !l.trim().is_empty()).collect();
    let [header, rows @ ..] = lines.as_slice() else {
        return Err("CSV must have a header row and at least one data row".to_string());
    };
    if rows.is_empty() {
        return Err("CSV must have a header row and at least one data row".to_string());
    }
    let headers = parse_row(header);
    let objects: Vec<Value> = rows
        .iter()
        .map(|line| {
            let values = parse_row(line);
            let object: Map<String, Value> = headers
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let value = values.get(i).map_or("", |v| v.trim());
                    (h.trim().to_string(), Value::String(value.to_string()))
                })
                .collect();
            Value::Object(object)
        })
        .collect();
    to_indented_string(&Value::Array(objects), 2).map_err(|e| e.to_string())
}

fn convert(input: &str) -> Result<String, String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(input) {
        return Ok(format!("--- CSV Output ---\n{}", json_to_csv(&items)?));
    }
    if input.contains(',') {
        return Ok(format!("--- JSON Output ---\n{}", csv_to_json(input)?));
    }
    Err("Input must be a JSON array or CSV data".to_string())
}

fn run(input: &str, _options: &ToolOptions) -> ToolResult {
    match convert(input) {
        Ok(output) => ToolResult::success(output),
        Err(e) => ToolResult::failure(e),
    }
}

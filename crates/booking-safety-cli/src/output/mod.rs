pub mod csv_out;
pub mod table;

use serde_json::Value;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => print_minimal(value),
    }
}

/// Pretty-print JSON to stdout.
fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// One line with only what the desk asked for: the difference and the
/// verdict for a computation, or the row count for a listing.
fn print_minimal(value: &Value) {
    if let Some(result) = value.get("result") {
        let difference = result
            .get("difference")
            .map(render_scalar)
            .unwrap_or_default();
        let classification = result
            .get("classification")
            .map(render_scalar)
            .unwrap_or_default();
        println!("{difference} {classification}");
        return;
    }

    match value {
        Value::Array(arr) => println!("{} records", arr.len()),
        other => println!("{}", render_scalar(other)),
    }
}

pub(crate) fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

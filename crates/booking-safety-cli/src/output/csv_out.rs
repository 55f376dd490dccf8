use serde_json::Value;
use std::io;

use super::render_scalar;

/// Write output as CSV to stdout. A computation envelope is flattened into
/// field,value rows (components first, then the totals); listings become one
/// row per record.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) if map.contains_key("result") => {
            let _ = wtr.write_record(["field", "value"]);
            if let Some(Value::Object(result)) = map.get("result") {
                if let Some(Value::Object(components)) = result.get("components") {
                    for (key, val) in components {
                        let _ = wtr.write_record([key.as_str(), &render_scalar(val)]);
                    }
                }
                for (key, val) in result {
                    if key == "components" {
                        continue;
                    }
                    let _ = wtr.write_record([key.as_str(), &render_scalar(val)]);
                }
            }
        }
        Value::Object(map) => {
            let _ = wtr.write_record(["field", "value"]);
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &render_scalar(val)]);
            }
        }
        Value::Array(arr) => {
            write_rows_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&render_scalar(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(render_scalar).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&render_scalar(item)]);
        }
    }
}

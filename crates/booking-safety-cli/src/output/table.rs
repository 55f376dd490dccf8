use colored::Colorize;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::render_scalar;

/// Format output as a table using the tabled crate. A computation envelope
/// gets the itemized breakdown the desk reads out to account managers;
/// listings (suppliers, gateways, history) get a plain grid.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("result") => print_breakdown(value),
        Value::Array(arr) => print_listing(arr),
        other => {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            if let Value::Object(map) = other {
                for (key, val) in map {
                    builder.push_record([key.as_str(), &render_scalar(val)]);
                }
            }
            println!("{}", Table::from(builder));
        }
    }
}

fn print_breakdown(envelope: &Value) {
    let result = &envelope["result"];
    let c = &result["components"];

    let mut builder = Builder::default();
    builder.push_record(["Item", "Value"]);
    builder.push_record(["DI rate", &render_scalar(&c["incentive_rate"])]);
    builder.push_record(["DI amount", &render_scalar(&c["incentive_amount"])]);
    builder.push_record(["Meta fee (base)", &render_scalar(&c["meta_fee_base"])]);
    builder.push_record(["Meta fee (ads)", &render_scalar(&c["meta_fee_ads"])]);
    builder.push_record(["Meta fee (total)", &render_scalar(&c["meta_fee_total"])]);
    builder.push_record(["PG fee kind", &render_scalar(&c["gateway_rate_kind"])]);
    builder.push_record(["PG rate value", &render_scalar(&c["gateway_rate_value"])]);
    builder.push_record(["PG fee amount", &render_scalar(&c["gateway_fee"])]);
    builder.push_record(["PLB rate", &render_scalar(&c["performance_bonus_rate"])]);
    builder.push_record([
        "PLB amount",
        &render_scalar(&c["performance_bonus_amount"]),
    ]);
    builder.push_record(["Handling (net of GST)", &render_scalar(&c["handling_fee_net"])]);
    builder.push_record([
        "Purchase side (purchase + meta + PG)",
        &render_scalar(&result["purchase_side_total"]),
    ]);
    builder.push_record([
        "Sale side (booking + DI + handling + PLB)",
        &render_scalar(&result["sale_side_total"]),
    ]);
    builder.push_record(["Difference", &render_scalar(&result["difference"])]);
    println!("{}", Table::from(builder));

    match result["classification"].as_str() {
        Some("Loss") => println!("{}", "Loss Booking".red().bold()),
        Some(_) => println!("{}", "Safe Booking".green().bold()),
        None => {}
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_listing(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(render_scalar).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", render_scalar(item));
        }
    }
}

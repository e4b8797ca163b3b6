//! Replays a recorded cassette through the request executor and prints the
//! normalized records of every interaction.
//!
//! Run with `RUST_LOG=tecdoc=debug` to see request events.

use std::fs;
use tecdoc::{CanonicalRecord, CanonicalValue, Cassette, Client, Params, ReplayTransport};

fn format_value(v: &CanonicalValue) -> String {
    match v {
        CanonicalValue::Null => "null".to_string(),
        CanonicalValue::Text(s) => {
            let preview: String = s.chars().take(60).collect();
            if s.chars().count() > 60 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        CanonicalValue::Record(r) => format!("{{{} fields}}", r.len()),
        CanonicalValue::List(l) => format!("[{} records]", l.len()),
    }
}

fn print_record(i: usize, record: &CanonicalRecord) {
    println!("  [{}]", i);
    for (name, value) in record.iter() {
        println!("      {} = {}", name, format_value(value));
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/article_search.json".to_string());

    println!("Reading: {}", path);

    let json = fs::read_to_string(&path).expect("Failed to read file");
    let cassette = Cassette::from_json(&json).expect("Failed to parse cassette");
    let operations: Vec<String> = cassette.interactions.iter().map(|i| i.operation.clone()).collect();

    println!("Interactions: {}", operations.len());

    let client = Client::new(ReplayTransport::from_cassette(cassette));

    for operation in &operations {
        println!("\n=== {} ===", operation);
        match client.execute(operation, Params::new()) {
            Ok(records) => {
                println!("Records: {}", records.len());
                for (i, record) in records.iter().enumerate().take(10) {
                    print_record(i, record);
                }
                if records.len() > 10 {
                    println!("  ... and {} more records", records.len() - 10);
                }
            }
            Err(e) => println!("  error: {}", e),
        }
    }
}

// src/export/csv.rs
//
// CSV export of a query result. The formatter is a pure function over the
// ordered result sequence so its output is byte-identical for identical
// input; the HTTP wrapper below hands it out as a download.

use crate::domain::listing::Listing;
use crate::responses::{csv_response, ResultResp};

const CSV_COLUMNS: [&str; 7] = ["id", "title", "price", "beds", "baths", "type", "address"];

/// Serializes the result sequence to CSV text. Every field is wrapped in
/// double quotes, with literal quotes escaped by doubling; no other
/// escaping is applied. Fields are joined by commas, records by newlines.
pub fn listings_csv(listings: &[&Listing]) -> String {
    let mut records = Vec::with_capacity(listings.len() + 1);
    records.push(csv_record(CSV_COLUMNS.map(String::from)));

    for l in listings {
        records.push(csv_record([
            l.id.clone(),
            l.title.clone(),
            l.price.to_string(),
            l.beds.to_string(),
            l.baths.to_string(),
            l.property_type.as_str().to_string(),
            l.address.clone(),
        ]));
    }

    records.join("\n")
}

fn csv_record(fields: [String; 7]) -> String {
    fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Runs the formatter and wraps the text as an attachment download.
pub fn export_listings_csv(listings: &[&Listing]) -> ResultResp {
    csv_response(listings_csv(listings), "listings.csv")
}

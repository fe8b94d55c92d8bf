pub mod csv;

pub use csv::{export_listings_csv, listings_csv};

pub mod connection;
pub mod favorites;
pub mod kv;

pub use connection::{init_db, Database};

use crate::db::{init_db, Database};
use crate::domain::catalog;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod export;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Create the database handle
    let db = Database::new("listings.sqlite3");

    // 2️⃣ Initialize database from schema.sql
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Load the catalog (external JSON file if present, seed otherwise)
    let catalog = catalog::load_or_seed("data/listings.json");
    println!("Catalog ready: {} listings", catalog.len());

    // 4️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 5️⃣ Serve requests, passing db + catalog handles into the closure
    let result = server.serve(move |req, _info| match handle(req, &db, &catalog) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

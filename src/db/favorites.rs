// src/db/favorites.rs
//
// Persistence for the favorites id list. The list is stored as a JSON
// array under one fixed key in the kv table; both directions are
// best-effort, so a broken database never takes the session down.

use crate::db::connection::Database;
use crate::db::kv::{kv_get, kv_set};

/// Single fixed storage key for the favorites id list.
pub const FAVORITES_KEY: &str = "rs:favs";

/// Small store seam so favorites can be backed by SQLite in production
/// and an in-memory stub in tests.
pub trait FavoritesStore {
    /// Reads the persisted set. Any read or parse failure yields the empty
    /// set; this never errors.
    fn load(&self) -> Vec<String>;

    /// Persists the set. Failures are logged and swallowed; the in-memory
    /// set stays authoritative for the session.
    fn save(&self, favorites: &[String]);
}

pub struct SqliteFavorites {
    db: Database,
}

impl SqliteFavorites {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl FavoritesStore for SqliteFavorites {
    fn load(&self) -> Vec<String> {
        let raw = self.db.with_conn(|conn| kv_get(conn, FAVORITES_KEY));
        match raw {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Loading favorites failed, starting empty: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, favorites: &[String]) {
        let json = match serde_json::to_string(favorites) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Encoding favorites failed, skipping save: {e}");
                return;
            }
        };
        if let Err(e) = self.db.with_conn(|conn| kv_set(conn, FAVORITES_KEY, &json)) {
            eprintln!("Saving favorites failed, keeping in-memory set: {e}");
        }
    }
}

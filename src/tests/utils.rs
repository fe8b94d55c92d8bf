use crate::db::connection::{init_db, Database};
use crate::db::favorites::FavoritesStore;
use crate::domain::listing::{Listing, PropertyType};
use astra::{Body, Request, Response};
use std::cell::RefCell;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB using the production schema, under a unique
/// temp path so tests don't share state.
pub fn make_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{label}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Build a GET request for the router.
pub fn get(path_and_query: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = http::Method::GET;
    *req.uri_mut() = path_and_query.parse().unwrap();
    req
}

/// Drain a response body to a string.
pub fn body_string(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Minimal listing for predicate and formatter tests.
pub fn listing(id: &str, price: i64, beds: u32, property_type: PropertyType) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Listing {id}"),
        price,
        beds,
        baths: 1,
        property_type,
        sqft: 600,
        address: "Kilimani, Nairobi".to_string(),
        images: vec!["https://example.com/1.jpg".to_string()],
        lat: -1.29,
        lng: 36.82,
        description: "Test listing".to_string(),
    }
}

/// In-memory favorites store: same contract as the SQLite one, no disk.
pub struct MemoryFavorites {
    slot: RefCell<Option<String>>,
}

impl MemoryFavorites {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl FavoritesStore for MemoryFavorites {
    fn load(&self) -> Vec<String> {
        self.slot
            .borrow()
            .as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
            .unwrap_or_default()
    }

    fn save(&self, favorites: &[String]) {
        if let Ok(json) = serde_json::to_string(favorites) {
            *self.slot.borrow_mut() = Some(json);
        }
    }
}

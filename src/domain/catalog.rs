// src/domain/catalog.rs
//
// The catalog is an opaque ordered sequence of listings, loaded once at
// startup and never mutated. The provider is external: a JSON file if one
// is present, otherwise the built-in seed.

use crate::domain::listing::{Listing, PropertyType};
use std::fs;

const SEED_COUNT: usize = 24;

const TITLES: [&str; 4] = [
    "Modern 2BR apartment in Kilimani",
    "Spacious family home near CBD",
    "Stylish studio — perfect for students",
    "Renovated 3BR townhouse with garden",
];

const AREAS: [&str; 4] = [
    "Kilimani, Nairobi",
    "Westlands, Nairobi",
    "Langata, Nairobi",
    "Karen, Nairobi",
];

const TYPE_CYCLE: [PropertyType; 4] = [
    PropertyType::Apartment,
    PropertyType::House,
    PropertyType::Studio,
    PropertyType::Townhouse,
];

const DESCRIPTION: &str = "Beautiful property with excellent natural light, \
modern finishes, and convenient access to transport and amenities.";

#[derive(Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog ids must be unique"
        );
        Catalog { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Resolves favorite ids against the catalog, skipping stale ids (ids
    /// no longer present) silently.
    pub fn resolve<'a>(&'a self, ids: &[String]) -> Vec<&'a Listing> {
        ids.iter().filter_map(|id| self.find(id)).collect()
    }
}

/// The built-in demo catalog: 24 listings cycling through four titles,
/// types, and areas, with prices repeating on a 10-listing cycle.
pub fn seed_catalog() -> Catalog {
    let listings = (0..SEED_COUNT)
        .map(|i| Listing {
            id: format!("L-{}", 1000 + i),
            title: TITLES[i % 4].to_string(),
            price: (6 + (i as i64 % 10)) * 10_000,
            beds: (i as u32 % 4) + 1,
            baths: (i as u32 % 3) + 1,
            property_type: TYPE_CYCLE[i % 4],
            sqft: 500 + (i as u32 % 10) * 120,
            address: AREAS[i % 4].to_string(),
            images: (1..=3)
                .map(|n| format!("https://picsum.photos/seed/{i}-{n}/800/600"))
                .collect(),
            lat: -1.2921 + (i % 5) as f64 * 0.01,
            lng: 36.8219 + (i % 5) as f64 * 0.01,
            description: DESCRIPTION.to_string(),
        })
        .collect();

    Catalog::new(listings)
}

/// Loads the catalog from a JSON file if one exists, falling back to the
/// seed on absence or parse failure. The fallback is a warning, not an
/// error: the app always starts with some catalog.
pub fn load_or_seed(path: &str) -> Catalog {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<Vec<Listing>>(&raw) {
            Ok(listings) => {
                println!("Loaded {} listings from {path}", listings.len());
                Catalog::new(listings)
            }
            Err(e) => {
                eprintln!("Failed to parse {path}, using seed catalog: {e}");
                seed_catalog()
            }
        },
        Err(_) => seed_catalog(),
    }
}

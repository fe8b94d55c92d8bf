use serde::{Deserialize, Serialize};

/// One property record in the catalog. Immutable after catalog load;
/// identity is `id`, which is unique within a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: i64,
    pub beds: u32,
    pub baths: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub sqft: u32,
    pub address: String,
    /// Non-empty; the first entry is the primary image.
    pub images: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    pub description: String,
}

/// Closed set of property types offered by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Townhouse,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Townhouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Studio => "Studio",
            PropertyType::Townhouse => "Townhouse",
        }
    }

    pub fn parse(s: &str) -> Option<PropertyType> {
        PropertyType::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

use crate::domain::listing::PropertyType;
use std::collections::HashMap;

/// Fallback minimum when the min-price param is missing or non-numeric.
pub const MIN_PRICE_DEFAULT: i64 = 0;
/// Fallback ceiling when the max-price param is missing or non-numeric.
pub const MAX_PRICE_DEFAULT: i64 = 10_000_000;

/// Type restriction: either none ("Any") or exactly one property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    Any,
    Only(PropertyType),
}

impl TypeFilter {
    /// Unknown strings (including the literal "Any") mean no restriction.
    pub fn parse(s: &str) -> TypeFilter {
        match PropertyType::parse(s) {
            Some(t) => TypeFilter::Only(t),
            None => TypeFilter::Any,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::Any => "Any",
            TypeFilter::Only(t) => t.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Relevance,
    PriceAsc,
    PriceDesc,
    BedsDesc,
}

impl SortMode {
    pub fn parse(s: &str) -> SortMode {
        match s {
            "price-asc" => SortMode::PriceAsc,
            "price-desc" => SortMode::PriceDesc,
            "beds" => SortMode::BedsDesc,
            _ => SortMode::Relevance,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::BedsDesc => "beds",
        }
    }
}

/// The user's current constraints plus sort mode. Mutated freely by the
/// caller between queries; the engine never modifies it.
///
/// `min_price <= max_price` is deliberately not enforced: an inverted
/// range is legal and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub type_filter: TypeFilter,
    pub min_price: i64,
    pub max_price: i64,
    /// 0 means no restriction.
    pub min_beds: u32,
    pub sort: SortMode,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            query: String::new(),
            type_filter: TypeFilter::Any,
            min_price: MIN_PRICE_DEFAULT,
            max_price: MAX_PRICE_DEFAULT,
            min_beds: 0,
            sort: SortMode::Relevance,
        }
    }
}

impl FilterCriteria {
    /// Builds criteria from decoded query-string params. Missing or
    /// malformed numeric params fall back to the defaults rather than
    /// erroring.
    pub fn from_params(params: &HashMap<String, String>) -> FilterCriteria {
        FilterCriteria {
            query: params.get("q").cloned().unwrap_or_default(),
            type_filter: params
                .get("type")
                .map(|s| TypeFilter::parse(s))
                .unwrap_or(TypeFilter::Any),
            min_price: parse_amount(params.get("min_price"), MIN_PRICE_DEFAULT),
            max_price: parse_amount(params.get("max_price"), MAX_PRICE_DEFAULT),
            min_beds: params
                .get("beds")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0),
            sort: params
                .get("sort")
                .map(|s| SortMode::parse(s))
                .unwrap_or(SortMode::Relevance),
        }
    }

    /// Serializes criteria + page back into a query string, so every link
    /// on the page (pagination, export, favorite toggles) carries the full
    /// filter state.
    pub fn query_string(&self, page: usize) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        ser.append_pair("q", &self.query)
            .append_pair("type", self.type_filter.as_str())
            .append_pair("min_price", &self.min_price.to_string())
            .append_pair("max_price", &self.max_price.to_string())
            .append_pair("beds", &self.min_beds.to_string())
            .append_pair("sort", self.sort.as_str())
            .append_pair("page", &page.to_string());
        ser.finish()
    }
}

fn parse_amount(raw: Option<&String>, fallback: i64) -> i64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(fallback)
}

// src/domain/query.rs
//
// The query engine: a pure predicate over one listing, and the
// filter-then-sort pipeline over the whole catalog.

use crate::domain::criteria::{FilterCriteria, SortMode, TypeFilter};
use crate::domain::listing::Listing;

/// Evaluates one listing against the criteria. Pure; no side effects.
///
/// The price range is inclusive on both ends. An inverted range
/// (`min_price > max_price`) fails everything, which is a valid empty
/// result, not an error. The text test is a case-insensitive substring
/// match OR'd across title, address, and description; an empty (or
/// whitespace-only) query passes unconditionally.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if let TypeFilter::Only(t) = criteria.type_filter {
        if listing.property_type != t {
            return false;
        }
    }
    if listing.price < criteria.min_price || listing.price > criteria.max_price {
        return false;
    }
    if criteria.min_beds > 0 && listing.beds < criteria.min_beds {
        return false;
    }

    let q = criteria.query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    [&listing.title, &listing.address, &listing.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&q))
}

/// Filters the catalog (preserving catalog order) and applies the sort
/// mode. `Relevance` is an explicit no-op: the filtered subset keeps the
/// catalog's relative order. The other modes use a stable sort, so records
/// comparing equal also keep their catalog order; ties are never broken by
/// a secondary key.
pub fn run<'a>(catalog: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let mut out: Vec<&Listing> = catalog.iter().filter(|l| matches(l, criteria)).collect();

    match criteria.sort {
        SortMode::Relevance => {}
        SortMode::PriceAsc => out.sort_by_key(|l| l.price),
        SortMode::PriceDesc => out.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::BedsDesc => out.sort_by(|a, b| b.beds.cmp(&a.beds)),
    }

    out
}

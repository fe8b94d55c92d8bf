use crate::db::favorites::{FavoritesStore, SqliteFavorites};
use crate::db::Database;
use crate::domain::catalog::Catalog;
use crate::domain::criteria::FilterCriteria;
use crate::domain::favorites::toggle;
use crate::domain::pagination::{self, PAGE_SIZE};
use crate::domain::query;
use crate::errors::ServerError;
use crate::export::export_listings_csv;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::templates::pages::{browse_page, detail_page, BrowseVm};
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, db: &Database, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => browse(&req, db, catalog),
        ("GET", "/listing") => listing_detail(&req, db, catalog),
        ("GET", "/favorites/toggle") => toggle_favorite(&req, db),
        ("GET", "/export") => export(&req, catalog),
        _ => Err(ServerError::NotFound),
    }
}

/// The browse page: recompute the whole filtered/sorted/paginated view
/// from the query string against the immutable catalog snapshot.
fn browse(req: &Request, db: &Database, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);
    let criteria = FilterCriteria::from_params(&params);

    let results = query::run(catalog.listings(), &criteria);
    let total_pages = pagination::total_pages(results.len(), PAGE_SIZE);
    let requested = params.get("page").and_then(|s| s.parse().ok()).unwrap_or(1);
    let page = pagination::resolve_page(requested, total_pages);
    let page_items = pagination::page_slice(&results, page, PAGE_SIZE);

    let store = SqliteFavorites::new(db.clone());
    let favorite_ids = store.load();
    let saved = catalog.resolve(&favorite_ids);

    let show_map = params.get("map").map(|v| v == "1").unwrap_or(false);

    let vm = BrowseVm {
        criteria: &criteria,
        result_count: results.len(),
        page,
        total_pages,
        page_items,
        favorite_ids: &favorite_ids,
        saved: &saved,
        show_map,
        map_token: std::env::var("MAPBOX_TOKEN").ok(),
    };

    html_response(browse_page(&vm))
}

fn listing_detail(req: &Request, db: &Database, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);
    let id = params.get("id").ok_or(ServerError::NotFound)?;
    let listing = catalog.find(id).ok_or(ServerError::NotFound)?;

    let store = SqliteFavorites::new(db.clone());
    let is_favorite = store.load().iter().any(|f| f == id);

    html_response(detail_page(listing, is_favorite))
}

/// Toggle one favorite, persist, and bounce back to the page the user
/// came from (only local paths accepted).
fn toggle_favorite(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let id = params
        .get("id")
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing listing id".into()))?;

    let store = SqliteFavorites::new(db.clone());
    let current = store.load();
    let next = toggle(&current, id);
    store.save(&next);

    let back = params
        .get("back")
        .map(String::as_str)
        .filter(|b| is_local_path(b))
        .unwrap_or("/");

    redirect_response(back)
}

/// CSV download of the same query the browse page runs, pre-pagination.
fn export(req: &Request, catalog: &Catalog) -> ResultResp {
    let params = parse_query(req);
    let criteria = FilterCriteria::from_params(&params);
    let results = query::run(catalog.listings(), &criteria);

    export_listings_csv(&results)
}

fn is_local_path(p: &str) -> bool {
    p.starts_with('/') && !p.starts_with("//")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

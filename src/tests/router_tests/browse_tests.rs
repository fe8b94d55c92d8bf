// src/tests/router_tests/browse_tests.rs

use crate::domain::catalog::seed_catalog;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db};

#[test]
fn browse_page_renders_count_and_listings() {
    let db = make_db("browse_root");
    let catalog = seed_catalog();

    let mut resp = handle(get("/"), &db, &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Showing <strong>24</strong> results"));
    assert!(body.contains("Modern 2BR apartment in Kilimani"));
    assert!(body.contains("Page 1 / 3"));
}

#[test]
fn type_filter_narrows_the_grid() {
    let db = make_db("browse_type");
    let catalog = seed_catalog();

    let mut resp = handle(get("/?type=House"), &db, &catalog).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Showing <strong>6</strong> results"));
    assert!(body.contains("Page 1 / 1"));
}

#[test]
fn out_of_range_page_resets_to_first() {
    let db = make_db("browse_reset");
    let catalog = seed_catalog();

    let mut resp = handle(get("/?page=5"), &db, &catalog).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Page 1 / 3"));
    // Page 1 contents, not an empty grid.
    assert!(body.contains("L-1000"));
}

#[test]
fn detail_page_shows_quick_facts() {
    let db = make_db("browse_detail");
    let catalog = seed_catalog();

    let mut resp = handle(get("/listing?id=L-1003"), &db, &catalog).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Quick facts"));
    assert!(body.contains("L-1003"));
    assert!(body.contains("Renovated 3BR townhouse with garden"));
}

#[test]
fn unknown_listing_id_is_not_found() {
    let db = make_db("browse_detail_missing");
    let catalog = seed_catalog();

    let result = handle(get("/listing?id=L-9999"), &db, &catalog);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn unknown_route_is_not_found() {
    let db = make_db("browse_404");
    let catalog = seed_catalog();

    let result = handle(get("/nope"), &db, &catalog);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

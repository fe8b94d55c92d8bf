// src/tests/router_tests/toggle_tests.rs

use crate::db::favorites::{FavoritesStore, SqliteFavorites};
use crate::domain::catalog::seed_catalog;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, make_db};

#[test]
fn toggle_persists_and_redirects_back() {
    let db = make_db("toggle_roundtrip");
    let catalog = seed_catalog();

    let resp = handle(
        get("/favorites/toggle?id=L-1000&back=%2F%3Fpage%3D2"),
        &db,
        &catalog,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/?page=2");

    // Reloading from persisted state sees the toggle.
    let store = SqliteFavorites::new(db.clone());
    assert_eq!(store.load(), vec!["L-1000".to_string()]);

    // A second toggle removes it again.
    handle(get("/favorites/toggle?id=L-1000"), &db, &catalog).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn toggle_without_id_is_a_bad_request() {
    let db = make_db("toggle_missing_id");
    let catalog = seed_catalog();

    let result = handle(get("/favorites/toggle"), &db, &catalog);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn toggle_ignores_non_local_back_targets() {
    let db = make_db("toggle_back_guard");
    let catalog = seed_catalog();

    let resp = handle(
        get("/favorites/toggle?id=L-1001&back=%2F%2Fevil.example"),
        &db,
        &catalog,
    )
    .unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
}

#[test]
fn saved_listings_appear_in_the_favorites_panel() {
    let db = make_db("toggle_panel");
    let catalog = seed_catalog();

    handle(get("/favorites/toggle?id=L-1001"), &db, &catalog).unwrap();

    let mut resp = handle(get("/"), &db, &catalog).unwrap();
    let body = crate::tests::utils::body_string(&mut resp);
    assert!(body.contains("Saved properties"));
    assert!(body.contains("Remove"));
}

// src/tests/favorites_tests.rs

use crate::db::favorites::{FavoritesStore, SqliteFavorites, FAVORITES_KEY};
use crate::db::kv::kv_set;
use crate::domain::catalog::seed_catalog;
use crate::domain::favorites::toggle;
use crate::tests::utils::{make_db, MemoryFavorites};

fn favs(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn toggle_is_its_own_inverse() {
    let start = favs(&["L-1000", "L-1003"]);
    let toggled = toggle(&start, "L-1010");
    assert_eq!(toggle(&toggled, "L-1010"), start);

    // Also when removing an existing id and re-adding it at the end.
    let removed = toggle(&start, "L-1000");
    assert_eq!(removed, favs(&["L-1003"]));
    assert_eq!(toggle(&removed, "L-1000"), favs(&["L-1003", "L-1000"]));
}

#[test]
fn toggle_appends_in_insertion_order_without_duplicates() {
    let mut set = Vec::new();
    for id in ["L-1002", "L-1000", "L-1005"] {
        set = toggle(&set, id);
    }
    assert_eq!(set, favs(&["L-1002", "L-1000", "L-1005"]));

    set = toggle(&set, "L-1000");
    assert_eq!(set, favs(&["L-1002", "L-1005"]));
}

#[test]
fn sqlite_store_persists_across_handles() {
    let db = make_db("favorites_persist");

    let store = SqliteFavorites::new(db.clone());
    let set = toggle(&store.load(), "L-1000");
    store.save(&set);

    // A fresh handle over the same file sees the persisted set.
    let reopened = SqliteFavorites::new(db);
    assert_eq!(reopened.load(), favs(&["L-1000"]));
}

#[test]
fn load_with_no_persisted_state_is_empty() {
    let db = make_db("favorites_empty");
    let store = SqliteFavorites::new(db);
    assert!(store.load().is_empty());
}

#[test]
fn load_with_corrupt_state_is_empty_not_error() {
    let db = make_db("favorites_corrupt");
    db.with_conn(|conn| kv_set(conn, FAVORITES_KEY, "{not json["))
        .unwrap();

    let store = SqliteFavorites::new(db);
    assert!(store.load().is_empty());
}

#[test]
fn memory_store_honors_the_same_contract() {
    let store = MemoryFavorites::new();
    assert!(store.load().is_empty());

    store.save(&favs(&["L-1000", "L-1001"]));
    assert_eq!(store.load(), favs(&["L-1000", "L-1001"]));
}

#[test]
fn stale_favorites_are_skipped_on_catalog_lookup() {
    let catalog = seed_catalog();
    let set = favs(&["L-1003", "L-9999", "L-1000"]);

    let resolved = catalog.resolve(&set);
    let ids: Vec<&str> = resolved.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["L-1003", "L-1000"]);
}

// src/tests/router_tests/export_tests.rs

use crate::domain::catalog::seed_catalog;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_db};

#[test]
fn export_returns_csv_attachment() {
    let db = make_db("export_all");
    let catalog = seed_catalog();

    let mut resp = handle(get("/export"), &db, &catalog).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"listings.csv\""
    );

    let body = body_string(&mut resp);
    let lines: Vec<&str> = body.split('\n').collect();
    assert_eq!(lines.len(), 25);
    assert!(lines[0].starts_with("\"id\",\"title\""));
}

#[test]
fn export_runs_the_same_query_as_the_browse_page() {
    let db = make_db("export_filtered");
    let catalog = seed_catalog();

    let mut resp = handle(get("/export?type=House&sort=price-asc"), &db, &catalog).unwrap();
    let body = body_string(&mut resp);

    let lines: Vec<&str> = body.split('\n').collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[1..].iter().all(|l| l.contains("\"House\"")));
}

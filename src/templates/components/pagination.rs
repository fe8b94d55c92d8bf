use crate::domain::criteria::FilterCriteria;
use maud::{html, Markup};

/// Prev/Next controls. The guards live here: at the first page there is no
/// Prev link and at the last no Next link, so the only page numbers a user
/// can request through the UI stay inside [1, total_pages].
pub fn pagination_controls(criteria: &FilterCriteria, page: usize, total_pages: usize) -> Markup {
    html! {
        div class="pager" {
            @if page > 1 {
                a class="btn-ghost" href=(page_href(criteria, page - 1)) { "Prev" }
            } @else {
                span class="btn-ghost muted" { "Prev" }
            }
            span { (page) " / " (total_pages) }
            @if page < total_pages {
                a class="btn-ghost" href=(page_href(criteria, page + 1)) { "Next" }
            } @else {
                span class="btn-ghost muted" { "Next" }
            }
        }
    }
}

fn page_href(criteria: &FilterCriteria, page: usize) -> String {
    format!("/?{}", criteria.query_string(page))
}

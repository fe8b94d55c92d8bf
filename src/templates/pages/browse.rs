use crate::domain::criteria::{FilterCriteria, SortMode, TypeFilter};
use crate::domain::listing::{Listing, PropertyType};
use crate::templates::components::{favorites_panel, listing_card, pagination_controls};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct BrowseVm<'a> {
    pub criteria: &'a FilterCriteria,
    pub result_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_items: &'a [&'a Listing],
    pub favorite_ids: &'a [String],
    /// Favorites resolved against the catalog (stale ids already skipped).
    pub saved: &'a [&'a Listing],
    pub show_map: bool,
    pub map_token: Option<String>,
}

pub fn browse_page(vm: &BrowseVm) -> Markup {
    // Every link on the page carries the full filter + page state.
    let back = format!("/?{}", vm.criteria.query_string(vm.page));
    let export_href = format!("/export?{}", vm.criteria.query_string(1));
    let map_href = if vm.show_map {
        back.clone()
    } else {
        format!("{back}&map=1")
    };

    desktop_layout(
        "Listings",
        html! {
            main class="browse" {
                aside {
                    (filter_form(vm.criteria))
                    (favorites_panel(vm.saved, vm.favorite_ids.len(), &back))
                }

                section {
                    @if vm.show_map {
                        (map_section(vm.map_token.as_deref()))
                    }

                    div class="card" style="display: flex; justify-content: space-between; align-items: center;" {
                        div class="muted" { "Showing " strong { (vm.result_count) } " results" }
                        div style="display: flex; gap: 0.5rem; align-items: center;" {
                            a class="btn-ghost" href=(map_href) {
                                @if vm.show_map { "Hide map" } @else { "Show map" }
                            }
                            a class="btn-ghost" href=(export_href) { "Export CSV" }
                            span class="muted" { "Page " (vm.page) " / " (vm.total_pages) }
                        }
                    }

                    div class="grid" {
                        @for listing in vm.page_items {
                            (listing_card(
                                listing,
                                vm.favorite_ids.iter().any(|f| f == &listing.id),
                                &back,
                            ))
                        }
                    }

                    (pagination_controls(vm.criteria, vm.page, vm.total_pages))
                }
            }
        },
    )
}

fn filter_form(criteria: &FilterCriteria) -> Markup {
    html! {
        section class="card" {
            h2 { "Filters" }
            form action="/" method="get" {
                div {
                    label for="q" class="muted" { "Search" }
                    input class="input" id="q" name="q" value=(criteria.query)
                        placeholder="search by title, area...";
                }

                div style="display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; margin-top: 0.75rem;" {
                    div {
                        label for="min_price" class="muted" { "Min price (KES)" }
                        input class="input" id="min_price" name="min_price" type="number"
                            value=(criteria.min_price);
                    }
                    div {
                        label for="max_price" class="muted" { "Max price (KES)" }
                        input class="input" id="max_price" name="max_price" type="number"
                            value=(criteria.max_price);
                    }
                }

                div style="margin-top: 0.75rem;" {
                    label for="type" class="muted" { "Type" }
                    select class="input" id="type" name="type" {
                        option value="Any" selected[criteria.type_filter == TypeFilter::Any] { "Any" }
                        @for t in PropertyType::ALL {
                            option value=(t.as_str())
                                selected[criteria.type_filter == TypeFilter::Only(t)] {
                                (t.as_str())
                            }
                        }
                    }
                }

                div style="margin-top: 0.75rem;" {
                    label for="beds" class="muted" { "Min beds" }
                    select class="input" id="beds" name="beds" {
                        option value="0" selected[criteria.min_beds == 0] { "Any" }
                        @for n in 1..=4u32 {
                            option value=(n) selected[criteria.min_beds == n] { (n) "+" }
                        }
                    }
                }

                div style="margin-top: 0.75rem;" {
                    label for="sort" class="muted" { "Sort" }
                    select class="input" id="sort" name="sort" {
                        option value="relevance" selected[criteria.sort == SortMode::Relevance] { "Relevance" }
                        option value="price-asc" selected[criteria.sort == SortMode::PriceAsc] { "Price: Low to High" }
                        option value="price-desc" selected[criteria.sort == SortMode::PriceDesc] { "Price: High to Low" }
                        option value="beds" selected[criteria.sort == SortMode::BedsDesc] { "Most beds" }
                    }
                }

                button class="btn-primary" type="submit" style="margin-top: 0.75rem;" { "Apply" }
            }
        }
    }
}

fn map_section(token: Option<&str>) -> Markup {
    html! {
        div class="card" {
            @match token {
                Some(token) => {
                    iframe class="map-frame" title="map"
                        src=(format!("https://api.mapbox.com/styles/v1/mapbox/streets-v11.html?title=copy&access_token={token}")) {}
                }
                None => {
                    div class="map-placeholder" {
                        "Map placeholder. Set MAPBOX_TOKEN to enable the interactive map."
                    }
                }
            }
        }
    }
}

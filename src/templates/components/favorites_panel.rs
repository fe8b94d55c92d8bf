use crate::domain::listing::Listing;
use crate::templates::components::toggle_href;
use crate::templates::format_kes;
use maud::{html, Markup};

/// Side panel of saved properties. `saved` holds the favorites already
/// resolved against the catalog (stale ids skipped); `saved_count` is the
/// raw persisted count.
pub fn favorites_panel(saved: &[&Listing], saved_count: usize, back: &str) -> Markup {
    html! {
        section class="card" {
            div style="display: flex; justify-content: space-between;" {
                strong { "Saved properties" }
                span class="muted" { (saved_count) }
            }
            @if saved.is_empty() {
                p class="muted" { "No saved items yet" }
            }
            @for listing in saved {
                div style="display: flex; align-items: center; gap: 0.5rem; margin-top: 0.5rem;" {
                    img src=(listing.images[0]) style="width: 3rem; height: 2rem; object-fit: cover; border-radius: 0.25rem;" alt=(listing.title);
                    div style="flex: 1;" {
                        (listing.title)
                        div class="muted" { (format_kes(listing.price)) }
                    }
                    a style="color: #ef4444;" href=(toggle_href(&listing.id, back)) { "Remove" }
                }
            }
        }
    }
}

use crate::domain::listing::Listing;
use crate::templates::components::{detail_href, toggle_href};
use crate::templates::format_kes;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing, is_favorite: bool, back: &str) -> Markup {
    let star_class = if is_favorite { "star saved" } else { "star" };
    let contact = format!(
        "mailto:agent@realty.example?subject=Interest in {}",
        listing.id
    );

    html! {
        article class="card listing" {
            img src=(listing.images[0]) alt=(listing.title);
            div {
                div style="display: flex; justify-content: space-between; align-items: center;" {
                    h3 { (listing.title) }
                    a class=(star_class) href=(toggle_href(&listing.id, back)) aria-label="Save favorite" { "★" }
                }
                div class="muted" { (listing.address) " • " (listing.sqft) " sqft" }
                div class="muted" { (format_kes(listing.price)) }
                div style="display: flex; gap: 0.5rem; margin-top: 0.5rem;" {
                    span class="chip" { (listing.beds) " beds" }
                    span class="chip" { (listing.baths) " baths" }
                    span class="chip" { (listing.property_type.as_str()) }
                }
                div style="display: flex; gap: 0.5rem; margin-top: 0.75rem;" {
                    a class="btn-primary" href=(detail_href(&listing.id)) { "View" }
                    a class="btn-ghost" href=(contact) { "Contact" }
                }
            }
        }
    }
}

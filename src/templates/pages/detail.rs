use crate::domain::listing::Listing;
use crate::templates::components::{detail_href, toggle_href};
use crate::templates::desktop_layout;
use crate::templates::format_kes;
use maud::{html, Markup};

pub fn detail_page(listing: &Listing, is_favorite: bool) -> Markup {
    let back = detail_href(&listing.id);

    desktop_layout(
        &listing.title,
        html! {
            main class="browse" {
                section {
                    div class="card" {
                        img src=(listing.images[0]) alt="primary"
                            style="width: 100%; height: 18rem; object-fit: cover; border-radius: 0.375rem;";
                        div style="display: flex; gap: 0.5rem; margin-top: 0.5rem;" {
                            @for src in &listing.images {
                                img src=(src) style="width: 5rem; height: 3.5rem; object-fit: cover; border-radius: 0.25rem;" alt="";
                            }
                        }
                        h3 { (listing.title) }
                        div class="muted" { (listing.address) }
                        div style="font-weight: bold; margin-top: 0.25rem;" { (format_kes(listing.price)) }
                        p { (listing.description) }
                        a class="btn-ghost" href=(toggle_href(&listing.id, &back)) {
                            @if is_favorite { "Unsave" } @else { "Save" }
                        }
                    }
                }

                aside {
                    section class="card" {
                        div class="muted" { "Quick facts" }
                        ul {
                            li { strong { "ID: " } (listing.id) }
                            li { strong { "Beds: " } (listing.beds) }
                            li { strong { "Baths: " } (listing.baths) }
                            li { strong { "Area: " } (listing.sqft) " sqft" }
                        }
                    }

                    section class="card" {
                        h4 { "Contact agent" }
                        (contact_form(listing))
                        p class="muted" { "Or call +254 700 000000" }
                    }
                }
            }
        },
    )
}

// Lead capture is a pass-through to the hosting platform's form handler;
// its outcome is not observed here.
fn contact_form(listing: &Listing) -> Markup {
    html! {
        form name="lead-contact" method="POST" data-netlify="true" {
            input type="hidden" name="form-name" value="lead-contact";
            input type="hidden" name="listing-id" value=(listing.id);
            div {
                label class="muted" { "Your name" }
                input class="input" name="name" required;
            }
            div {
                label class="muted" { "Phone or email" }
                input class="input" name="contact" required;
            }
            div {
                label class="muted" { "Message" }
                textarea class="input" name="message" rows="3" {
                    "I'm interested in " (listing.title) " (" (listing.id) ")"
                }
            }
            button class="btn-primary" type="submit" { "Send inquiry" }
        }
    }
}

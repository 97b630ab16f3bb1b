use crate::domain::Listing;
use crate::templates::{components::listing_card, desktop_layout};
use maud::{html, Markup};

pub fn index_page(listings: &[Listing]) -> Markup {
    desktop_layout(
        "All Listings",
        html! {
            h1 { "All Listings" }

            @if listings.is_empty() {
                p class="lead" { "No listings yet. " a href="/listings/new" { "Add the first one." } }
            } @else {
                div class="listing-grid" {
                    @for listing in listings {
                        (listing_card(listing))
                    }
                }
            }
        },
    )
}

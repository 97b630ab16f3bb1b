use crate::domain::Listing;
use crate::templates::components::format_price;
use maud::{html, Markup};

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a href=(format!("/listings/{}", listing.id)) class="listing-link" {
            div class="card listing-card" {
                img src=(listing.image) class="card-img-top" alt="listing image";
                div class="card-body" {
                    h2 { (listing.title) }
                    p class="price" { (format_price(listing.price)) " / night" }
                }
            }
        }
    }
}

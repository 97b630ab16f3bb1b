use crate::domain::Listing;
use crate::templates::{
    components::{button, format_price},
    desktop_layout,
};
use maud::{html, Markup};

pub fn show_page(listing: &Listing) -> Markup {
    desktop_layout(
        &listing.title,
        html! {
            h1 { (listing.title) }

            div class="card show-card" {
                img src=(listing.image) class="card-img-top show-img" alt="listing image";
                div class="card-body" {
                    p class="description" { (listing.description) }
                    p class="price" { (format_price(listing.price)) " / night" }
                    p { (listing.location) ", " (listing.country) }
                }
            }

            div class="show-actions" {
                a href=(format!("/listings/{}/edit", listing.id)) class="btn" { "Edit" }

                form method="post" action=(format!("/listings/{}?_method=DELETE", listing.id)) {
                    (button("Delete"))
                }
            }
        },
    )
}

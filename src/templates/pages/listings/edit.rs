use crate::domain::Listing;
use crate::templates::{components::listing_form, desktop_layout};
use maud::{html, Markup};

pub fn edit_page(listing: &Listing) -> Markup {
    let action = format!("/listings/{}?_method=PUT", listing.id);

    desktop_layout(
        "Edit Listing",
        html! {
            h1 { "Edit your Listing" }
            img src=(listing.image) class="edit-preview" alt="current image";
            (listing_form(&action, "Edit", Some(listing)))
        },
    )
}

use crate::templates::{components::listing_form, desktop_layout};
use maud::{html, Markup};

pub fn new_page() -> Markup {
    desktop_layout(
        "New Listing",
        html! {
            h1 { "Create a New Listing" }
            (listing_form("/listings", "Add", None))
        },
    )
}

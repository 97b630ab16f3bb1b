use crate::domain::Listing;
use maud::{html, Markup};

/// Form shared by the new and edit pages. Field names follow the
/// `listing[field]` convention the router decodes.
pub fn listing_form(action: &str, submit_label: &str, listing: Option<&Listing>) -> Markup {
    let value = |f: fn(&Listing) -> String| listing.map(f).unwrap_or_default();

    html! {
        form method="post" action=(action) class="listing-form" novalidate {
            label for="title" { "Title" }
            input type="text" id="title" name="listing[title]" required
                value=(value(|l| l.title.clone()));

            label for="description" { "Description" }
            textarea id="description" name="listing[description]" {
                (value(|l| l.description.clone()))
            }

            label for="image" { "Image URL" }
            input type="text" id="image" name="listing[image]"
                value=(value(|l| l.image.clone()));

            label for="price" { "Price" }
            input type="number" id="price" name="listing[price]" min="0" required
                value=(value(|l| l.price.to_string()));

            label for="country" { "Country" }
            input type="text" id="country" name="listing[country]" required
                value=(value(|l| l.country.clone()));

            label for="location" { "Location" }
            input type="text" id="location" name="listing[location]" required
                value=(value(|l| l.location.clone()));

            button type="submit" class="btn" { (submit_label) }
        }
    }
}

/// Stored in place of an empty or missing image.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=800&q=60";

/// A persisted listing. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub location: String,
    pub country: String,
}

/// A listing that passed the schema and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub location: String,
    pub country: String,
}

impl NewListing {
    pub fn into_listing(self, id: String) -> Listing {
        Listing {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            price: self.price,
            location: self.location,
            country: self.country,
        }
    }
}

/// Fields supplied by an update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
    pub country: Option<String>,
}

impl ListingPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields into `listing`, leaving the rest untouched.
    pub fn apply(&self, listing: &mut Listing) {
        if let Some(title) = &self.title {
            listing.title = title.clone();
        }
        if let Some(description) = &self.description {
            listing.description = description.clone();
        }
        if let Some(image) = &self.image {
            listing.image = image.clone();
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(location) = &self.location {
            listing.location = location.clone();
        }
        if let Some(country) = &self.country {
            listing.country = country.clone();
        }
    }
}

/// Empty image input falls back to the placeholder.
pub fn image_or_default(image: Option<String>) -> String {
    match image {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => DEFAULT_IMAGE.to_string(),
    }
}

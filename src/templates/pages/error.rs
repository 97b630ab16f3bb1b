use crate::templates::desktop_layout;
use http::StatusCode;
use maud::{html, Markup};

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {}", status.as_u16()),
        html! {
            div class="alert alert-danger" role="alert" {
                h1 { "Error " (status.as_u16()) }
                p { (message) }
            }
            p { a href="/listings" { "← Back to listings" } }
        },
    )
}

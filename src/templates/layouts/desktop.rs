use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Wanderlust" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/listings" class="brand" { "Wanderlust" }
                    nav {
                        ul {
                            li { a href="/listings" { "Explore" } }
                            li { a href="/listings/new" { "Add a listing" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
                footer class="footer" {
                    p { "© Wanderlust" }
                }
            }
        }
    }
}

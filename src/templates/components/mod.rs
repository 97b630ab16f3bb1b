use maud::{html, Markup};

pub mod card;
pub mod listing_form;

pub use card::listing_card;
pub use listing_form::listing_form;

pub fn button(label: &str) -> Markup {
    html! {
        button class="btn" { (label) }
    }
}

/// `1234.5` -> `$1,234.50`, `120.0` -> `$120`.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac == 0 {
        format!("${grouped}")
    } else {
        format!("${grouped}.{frac:02}")
    }
}

use maud::{html, Markup};

pub mod error;
pub mod feedback_item;
pub mod notice;
pub mod property_card;

pub use error::error_page;
pub use feedback_item::feedback_item;
pub use notice::notice_banner;
pub use property_card::property_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 style="font-size: 1.25rem; font-weight: 600; margin-top: 0;" { (title) }
            (body)
        }
    }
}

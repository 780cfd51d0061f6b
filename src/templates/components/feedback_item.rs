use crate::api::FeedbackItem;
use crate::domain::format::{feedback_label, feedback_style, format_feedback_date};
use maud::{html, Markup};

pub fn feedback_item(item: &FeedbackItem) -> Markup {
    html! {
        div class="feedback-item" style="border: 1px solid #e5e7eb; border-radius: 6px; padding: 1rem; margin-bottom: 0.75rem; background-color: #f9fafb;" {
            div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem;" {
                div style="display: flex; align-items: center; gap: 0.5rem;" {
                    span style="font-weight: 500; font-size: 0.875rem;" { (item.submitter_name) }
                    span class="badge" style=(feedback_style(item.kind).css()) { (feedback_label(item.kind)) }
                }
                span class="muted" style="font-size: 0.75rem;" { (format_feedback_date(&item.timestamp)) }
            }
            p style="font-size: 0.875rem; color: #374151; margin: 0;" { (item.message) }
        }
    }
}

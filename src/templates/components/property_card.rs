use crate::domain::format::{format_currency, format_percentage, MotivationTier};
use crate::domain::{GenerationStatus, PropertyRow};
use maud::{html, Markup};

pub fn property_card(row: &PropertyRow) -> Markup {
    let p = &row.property;
    let motivation = MotivationTier::for_score(p.motivation_score).style();

    html! {
        article class="card property" id=(format!("property-{}", p.id)) {
            div style="display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem;" {
                div {
                    div style="display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 1rem;" {
                        div {
                            h3 style="font-size: 1.125rem; margin: 0 0 0.25rem 0;" { (p.address) }
                            p class="muted" style="margin: 0;" { (p.city) ", " (p.state) " " (p.zip_code) }
                            @if let Some(source) = &p.data_source {
                                p style="font-size: 0.75rem; color: #059669; margin: 0.25rem 0 0 0;" {
                                    "📊 Source: " (source)
                                }
                            }
                        }
                        span class="badge" style=(motivation.css()) {
                            "🎯 " (p.motivation_score) "/10 Motivation"
                        }
                    }

                    dl style="display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 1rem; font-size: 0.875rem; margin: 0;" {
                        (fact("Owner:", html! { (p.owner_name) }))
                        (fact("Situation:", html! { (row.situation_label) }))
                        (fact("Est. Value:", html! { span style="color: #16a34a;" { (format_currency(p.estimated_value)) } }))
                        (fact("Equity:", html! { (format_percentage(p.equity_percentage)) }))
                        (fact("Liens:", html! { span style="color: #dc2626;" { (format_currency(p.liens_amount)) } }))
                        (fact("Days in Situation:", html! { (p.days_in_situation) " days" }))
                    }
                }

                div style="border-left: 1px solid #e5e7eb; padding-left: 1.5rem;" {
                    h4 style="margin-top: 0;" { "🤖 AI-Generated Message" }
                    (message_panel(row))
                }
            }
        }
    }
}

fn fact(label: &str, value: Markup) -> Markup {
    html! {
        div {
            dt class="muted" { (label) }
            dd style="font-weight: 500; margin: 0;" { (value) }
        }
    }
}

fn message_panel(row: &PropertyRow) -> Markup {
    let action = format!("/properties/{}/message", row.property.id);

    html! {
        @if let Some(message) = &row.message {
            div style="background-color: #f9fafb; padding: 0.75rem; border-radius: 6px; border: 1px solid #e5e7eb; margin-bottom: 0.75rem;" {
                p style="font-size: 0.875rem; font-weight: 500; margin: 0 0 0.5rem 0;" { "Personalized Message:" }
                p class="generated-message" style="font-size: 0.875rem; font-style: italic; margin: 0;" { "\"" (message) "\"" }
            }
        }
        @match (row.generation, &row.message) {
            (GenerationStatus::Pending, _) => {
                button class="btn btn-green" style="width: 100%;" disabled { "✨ Generating..." }
            }
            (GenerationStatus::Available, Some(_)) => {
                form method="post" action=(action) {
                    button type="submit" class="btn btn-gray" style="width: 100%;"
                        data-busy-label="✨ Generating..." { "🔄 Regenerate" }
                }
            }
            _ => {
                form method="post" action=(action) {
                    button type="submit" class="btn btn-green" style="width: 100%;"
                        data-busy-label="✨ Generating..." { "✨ Generate Message" }
                }
            }
        }
    }
}

// templates/pages/home.rs

use crate::api::FeedbackType;
use crate::domain::filters::MOTIVATION_CHOICES;
use crate::domain::{FeedbackView, FilterCriteria, PropertyRow, SituationCatalog};
use crate::state::Notice;
use crate::templates::components::{card, feedback_item, notice_banner, property_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub catalog: &'a SituationCatalog,
    pub filters: FilterCriteria,
    pub rows: Vec<PropertyRow>,
    pub searching: bool,
    pub has_searched: bool,
    pub feedback: FeedbackView,
    pub notice: Option<Notice>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Wholesaler AI - Property Prospector",
        html! {
            @if let Some(notice) = &vm.notice {
                (notice_banner(notice))
            }
            (card("🔍 Search Properties", filter_form(vm)))
            (results(vm))
            (card("💡 Community Feedback", feedback_section(&vm.feedback)))
        },
    )
}

fn filter_form(vm: &HomeVm) -> Markup {
    let f = &vm.filters;

    html! {
        form method="post" action="/search" id="filters" {
            div class="grid" {
                div class="field" {
                    label for="zip_code" { "Zip Code" }
                    input type="text" id="zip_code" name="zip_code"
                        placeholder="30309 (Atlanta) or 10001 (NYC)"
                        value=(f.zip_code());
                }
                div class="field" {
                    label for="min_equity" { "Min Equity % (1-100)" }
                    input type="number" id="min_equity" name="min_equity"
                        placeholder="25" min="1" max="100" step="1"
                        value=[f.min_equity_percent()];
                    small class="muted" { "Enter whole numbers (e.g., 25 for 25% equity)" }
                }
                div class="field" {
                    label for="max_equity" { "Max Equity % (1-100)" }
                    input type="number" id="max_equity" name="max_equity"
                        placeholder="100" min="1" max="100" step="1"
                        value=[f.max_equity_percent()];
                }
                div class="field" {
                    label for="min_value" { "Min Value ($)" }
                    input type="number" id="min_value" name="min_value" min="0" step="1000"
                        value=[f.min_value()];
                }
                div class="field" {
                    label for="max_value" { "Max Value ($)" }
                    input type="number" id="max_value" name="max_value" min="0" step="1000"
                        value=[f.max_value()];
                }
                div class="field" {
                    label for="min_motivation" { "Min Motivation Score" }
                    select id="min_motivation" name="min_motivation" {
                        option value="" selected[f.min_motivation().is_none()] { "Any" }
                        @for (score, label) in MOTIVATION_CHOICES {
                            option value=(score) selected[f.min_motivation() == Some(score)] { (label) }
                        }
                    }
                }
            }

            div class="field" style="margin-bottom: 1rem;" {
                label { "Situation Types" }
                @if vm.catalog.is_empty() {
                    p class="muted" style="font-size: 0.875rem;" { "Situation types are unavailable right now." }
                }
                div style="display: flex; flex-wrap: wrap; gap: 0.75rem;" {
                    @for t in vm.catalog.types() {
                        label style="display: flex; align-items: center; font-size: 0.875rem;" title=[t.description.as_deref()] {
                            input type="checkbox" name="situation_types" value=(t.value)
                                style="margin-right: 0.5rem; width: auto;"
                                checked[f.is_selected(&t.value)]
                                hx-post="/filters/situation"
                                hx-vals=(serde_json::json!({ "value": &t.value }).to_string())
                                hx-trigger="change"
                                hx-swap="none";
                            span { (t.label) }
                        }
                    }
                }
            }

            div style="display: flex; gap: 0.75rem;" {
                @if vm.searching {
                    button type="submit" class="btn btn-blue" disabled { "Searching..." }
                } @else {
                    button type="submit" class="btn btn-blue" data-busy-label="Searching..." { "🔍 Search Properties" }
                }
                button type="submit" class="btn btn-gray" formaction="/filters/reset" { "Reset" }
            }

            p class="muted" style="margin-top: 0.75rem; font-size: 0.75rem;" {
                "💡 Try Atlanta zip codes (30309, 30308, 30305) for real data, or NYC zip codes (10001) for demo data"
            }
        }
    }
}

fn results(vm: &HomeVm) -> Markup {
    html! {
        section id="results" {
            div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;" {
                h2 style="font-size: 1.25rem; font-weight: 600;" {
                    "📋 Found " (vm.rows.len()) " Properties"
                }
                @if !vm.rows.is_empty() {
                    span class="muted" style="font-size: 0.875rem;" { "Sorted by motivation score (highest first)" }
                }
            }

            @for row in &vm.rows {
                (property_card(row))
            }

            @if vm.rows.is_empty() && !vm.searching {
                div class="empty" style="text-align: center; padding: 3rem;" {
                    p class="muted" {
                        @if vm.has_searched {
                            "No properties matched these filters."
                        } @else {
                            "Enter a zip code and search to find motivated sellers in your area."
                        }
                    }
                }
            }
        }
    }
}

fn feedback_section(fb: &FeedbackView) -> Markup {
    html! {
        div style="display: flex; justify-content: flex-end; margin-top: -3rem; margin-bottom: 1rem;" {
            form method="post" action="/feedback/toggle" {
                button type="submit" class="btn btn-gray" {
                    @if fb.show_list { "Hide Suggestions" } @else { "View All Suggestions" }
                }
            }
        }

        p class="muted" {
            "Help shape the future of Wholesaler AI! Share your ideas for new features or improvements."
        }

        form method="post" action="/feedback" id="feedback-form" style="margin-bottom: 2rem;" {
            h3 style="font-size: 1rem; font-weight: 500;" { "Submit Your Suggestion" }

            div style="display: grid; grid-template-columns: 1fr 2fr; gap: 1rem; margin-bottom: 1rem;" {
                div class="field" {
                    label for="submitter_name" { "Your Name (Optional)" }
                    input type="text" id="submitter_name" name="submitter_name"
                        placeholder="Enter your name" value=(fb.draft.submitter_name);
                }
                div class="field" {
                    label for="type" { "Suggestion Type" }
                    select id="type" name="type" {
                        @for kind in FeedbackType::ALL {
                            option value=(kind.as_str()) selected[fb.draft.kind == kind] { (kind.describe()) }
                        }
                    }
                }
            }

            div class="field" style="margin-bottom: 1rem;" {
                label for="message" { "Your Suggestion" }
                textarea id="message" name="message" style="min-height: 100px; resize: vertical;"
                    placeholder="Describe your feature request, improvement idea, or feedback..." {
                    (fb.draft.message)
                }
            }

            @if fb.submitting {
                button type="submit" class="btn btn-green" disabled { "Submitting..." }
            } @else {
                button type="submit" class="btn btn-green" data-busy-label="Submitting..." { "📝 Submit Suggestion" }
            }
        }

        @if fb.show_list {
            div id="suggestions" {
                h3 style="font-size: 1rem; font-weight: 500;" {
                    "Community Suggestions (" (fb.items.len()) ")"
                }
                @if fb.items.is_empty() {
                    p class="muted" style="text-align: center; padding: 2rem;" {
                        "No suggestions yet. Be the first to share your ideas!"
                    }
                } @else {
                    div style="max-height: 400px; overflow-y: auto;" {
                        @for item in &fb.items {
                            (feedback_item(item))
                        }
                    }
                }
            }
        }
    }
}

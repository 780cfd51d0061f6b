// src/tests/router_tests/page_tests.rs

use crate::api::FeedbackType;
use crate::domain::{GenerationStatus, PropertyRow};
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::Notice;
use crate::templates::components::property_card;
use crate::tests::utils::{
    app_with, body_string, get, sample_feedback, sample_property, Call, FakeBackend,
};

#[test]
fn startup_loads_catalog_and_feedback_once() {
    let (fake, state) = app_with(FakeBackend::new());

    handle(get("/"), &state).unwrap();
    handle(get("/"), &state).unwrap();

    assert_eq!(fake.calls(), vec![Call::SituationTypes, Call::ListFeedback]);
}

#[test]
fn home_page_renders_filters_and_empty_results() {
    let (_fake, state) = app_with(FakeBackend::new());

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Pre-Foreclosure"));
    assert!(body.contains("Tax Delinquent"));
    assert!(body.contains("Found 0 Properties"));
    assert!(body.contains("Enter a zip code and search"));
    assert!(body.contains("Community Feedback"));
    assert!(body.contains("🔍 Search Properties"));
}

#[test]
fn page_still_renders_when_catalog_fails() {
    let (_fake, state) = app_with(FakeBackend::new().without_catalog());

    let resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("name=\"situation_types\""));
    assert!(body.contains("Situation Types"));
    assert!(body.contains("Situation types are unavailable right now."));
}

#[test]
fn submit_buttons_switch_to_their_busy_label_on_click() {
    let (_fake, state) = app_with(FakeBackend::new());

    let body = body_string(handle(get("/"), &state).unwrap());

    assert!(body.contains("data-busy-label=\"Searching...\""));
    assert!(body.contains("data-busy-label=\"Submitting...\""));
    assert!(body.contains("button.dataset.busyLabel"));
    // Reset posts immediately and never shows a busy state.
    assert!(body.contains("formaction=\"/filters/reset\">Reset</button>"));
}

#[test]
fn regenerate_in_flight_keeps_the_current_message_visible() {
    let row = PropertyRow {
        property: sample_property(1, "probate", 7),
        situation_label: "Probate".into(),
        generation: GenerationStatus::Pending,
        message: Some("Hello from a local investor".into()),
    };

    let html = property_card(&row).into_string();

    assert!(html.contains("Hello from a local investor"));
    assert!(html.contains("disabled>✨ Generating...</button>"));
    assert!(!html.contains("🔄 Regenerate"));
}

#[test]
fn notice_is_shown_once() {
    let (_fake, state) = app_with(FakeBackend::new());
    state.notify(Notice::error("Something broke"));

    let first = body_string(handle(get("/"), &state).unwrap());
    let second = body_string(handle(get("/"), &state).unwrap());

    assert!(first.contains("Something broke"));
    assert!(!second.contains("Something broke"));
}

#[test]
fn suggestions_are_hidden_until_toggled() {
    let fake = FakeBackend::new()
        .with_feedback(vec![sample_feedback(FeedbackType::Bug, "Search button flickers")]);
    let (_fake, state) = app_with(fake);

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(!body.contains("Search button flickers"));
    assert!(body.contains("View All Suggestions"));

    state.feedback.toggle_list();
    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Community Suggestions (1)"));
    assert!(body.contains("Search button flickers"));
    assert!(body.contains("9/2/2025"));
    assert!(body.contains("Hide Suggestions"));
}

#[test]
fn health_check() {
    let (_fake, state) = app_with(FakeBackend::new());
    let body = body_string(handle(get("/health"), &state).unwrap());
    assert_eq!(body, "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let (_fake, state) = app_with(FakeBackend::new());
    assert!(matches!(
        handle(get("/admin"), &state),
        Err(ServerError::NotFound)
    ));
}

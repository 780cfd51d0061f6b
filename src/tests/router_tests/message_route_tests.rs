use crate::api::PropertyId;
use crate::domain::GenerationStatus;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    app_with, body_string, get, location, post_form, sample_property, FakeBackend,
};

fn app_with_results() -> (std::sync::Arc<FakeBackend>, crate::state::AppState) {
    let fake = FakeBackend::new();
    fake.push_search(vec![sample_property(1, "probate", 7), sample_property(2, "probate", 8)]);
    let (fake, state) = app_with(fake);
    handle(post_form("/search", ""), &state).unwrap();
    (fake, state)
}

#[test]
fn generate_shows_the_message_and_regenerate() {
    let (_fake, state) = app_with_results();

    let resp = handle(post_form("/properties/1/message", ""), &state).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/#property-1");

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Message 1 for property 1"));
    assert!(body.contains("🔄 Regenerate"));
    assert!(body.contains("Personalized Message:"));
    assert!(body.contains("data-busy-label=\"✨ Generating...\""));
}

#[test]
fn failed_generation_shows_an_error_and_keeps_other_messages() {
    let (fake, state) = app_with_results();
    handle(post_form("/properties/2/message", ""), &state).unwrap();
    fake.fail_generation_for(PropertyId(1));

    handle(post_form("/properties/1/message", ""), &state).unwrap();

    assert_eq!(state.messages.status(PropertyId(1)), GenerationStatus::Absent);
    assert_eq!(state.messages.status(PropertyId(2)), GenerationStatus::Available);

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains("Error generating message for property 1"));
    assert!(body.contains("Message 1 for property 2"));
}

#[test]
fn invalid_property_id_is_a_bad_request() {
    let (_fake, state) = app_with_results();
    assert!(matches!(
        handle(post_form("/properties/abc/message", ""), &state),
        Err(ServerError::BadRequest(_))
    ));
}

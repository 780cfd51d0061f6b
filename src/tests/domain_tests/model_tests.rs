use crate::api::{FeedbackItem, FeedbackType, GeneratedMessage, MessageRequest, Property, PropertyId};
use serde_json::json;

#[test]
fn property_parses_backend_record() {
    let raw = json!({
        "id": 5,
        "address": "654 Cedar Lane",
        "zip_code": "10003",
        "city": "New York",
        "state": "NY",
        "property_type": "single_family",
        "owner_name": "Michael Brown",
        "situation_type": "tax_delinquent",
        "equity_percentage": 0.45,
        "estimated_value": 390000,
        "liens_amount": 45000,
        "days_in_situation": 90,
        "motivation_score": 8,
        "last_updated": "2025-08-30",
        "data_source": "Mock Data"
    });

    let property: Property = serde_json::from_value(raw).unwrap();
    assert_eq!(property.id, PropertyId(5));
    assert_eq!(property.data_source.as_deref(), Some("Mock Data"));
}

#[test]
fn property_missing_required_fields_is_rejected() {
    let raw = json!({ "id": 5, "address": "654 Cedar Lane" });
    assert!(serde_json::from_value::<Property>(raw).is_err());
}

#[test]
fn generated_message_ignores_extra_fields() {
    let raw = json!({
        "property_id": 1,
        "generated_message": "Hi John, I buy homes in your area...",
        "situation_type": "pre_foreclosure",
        "owner_name": "John Smith",
        "estimated_response_rate": "helpful"
    });
    let msg: GeneratedMessage = serde_json::from_value(raw).unwrap();
    assert!(msg.generated_message.starts_with("Hi John"));
}

#[test]
fn message_request_body() {
    let body = serde_json::to_value(MessageRequest { property_id: PropertyId(7) }).unwrap();
    assert_eq!(body, json!({ "property_id": 7 }));
}

#[test]
fn feedback_type_round_trips_and_tolerates_unknown_values() {
    let item: FeedbackItem = serde_json::from_value(json!({
        "type": "praise",
        "message": "Love it",
        "submitter_name": "Anonymous",
        "timestamp": "2025-09-02T14:30:00.000Z"
    }))
    .unwrap();
    assert_eq!(item.kind, FeedbackType::General);

    let bug: FeedbackType = serde_json::from_value(json!("bug")).unwrap();
    assert_eq!(bug, FeedbackType::Bug);
    assert_eq!(serde_json::to_value(FeedbackType::Improvement).unwrap(), json!("improvement"));
}

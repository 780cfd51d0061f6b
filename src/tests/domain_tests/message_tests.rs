use crate::api::PropertyId;
use crate::domain::messages::GenerateError;
use crate::domain::{GenerationStatus, MessageTracker};
use crate::tests::utils::{Call, FakeBackend};
use std::sync::{Arc, Mutex};

const P1: PropertyId = PropertyId(1);
const P2: PropertyId = PropertyId(2);

#[test]
fn absent_pending_available_is_the_success_path() {
    let fake = Arc::new(FakeBackend::new());
    let tracker = Arc::new(MessageTracker::default());
    let during = Arc::new(Mutex::new(None));
    {
        let tracker = tracker.clone();
        let during = during.clone();
        fake.set_probe(move || *during.lock().unwrap() = Some(tracker.status(P1)));
    }

    assert_eq!(tracker.status(P1), GenerationStatus::Absent);
    let message = tracker.generate(&*fake, P1).unwrap();

    assert_eq!(*during.lock().unwrap(), Some(GenerationStatus::Pending));
    assert_eq!(tracker.status(P1), GenerationStatus::Available);
    assert_eq!(tracker.message(P1), Some(message));
    assert_eq!(tracker.pending_count(), 0);
}

#[test]
fn failure_returns_to_absent() {
    let fake = FakeBackend::new();
    fake.fail_generation_for(P1);
    let tracker = MessageTracker::default();

    let err = tracker.generate(&fake, P1).unwrap_err();

    assert!(matches!(err, GenerateError::Backend { id, .. } if id == P1));
    assert_eq!(tracker.status(P1), GenerationStatus::Absent);
    assert_eq!(tracker.message(P1), None);
}

#[test]
fn failure_for_one_property_leaves_another_untouched() {
    let fake = FakeBackend::new();
    let tracker = MessageTracker::default();
    let p2_message = tracker.generate(&fake, P2).unwrap();

    fake.fail_generation_for(P1);
    assert!(tracker.generate(&fake, P1).is_err());

    assert_eq!(tracker.status(P1), GenerationStatus::Absent);
    assert_eq!(tracker.status(P2), GenerationStatus::Available);
    assert_eq!(tracker.message(P2), Some(p2_message));
}

#[test]
fn regenerate_overwrites_the_stored_message() {
    let fake = FakeBackend::new();
    let tracker = MessageTracker::default();

    let first = tracker.generate(&fake, P1).unwrap();
    let second = tracker.generate(&fake, P1).unwrap();

    assert_ne!(first, second);
    assert_eq!(tracker.message(P1), Some(second));
}

#[test]
fn regenerate_keeps_showing_the_current_message_while_pending() {
    let fake = Arc::new(FakeBackend::new());
    let tracker = Arc::new(MessageTracker::default());
    let first = tracker.generate(&*fake, P1).unwrap();
    let during = Arc::new(Mutex::new(None));
    {
        let tracker = tracker.clone();
        let during = during.clone();
        fake.set_probe(move || {
            *during.lock().unwrap() = Some((tracker.status(P1), tracker.message(P1)));
        });
    }

    let second = tracker.generate(&*fake, P1).unwrap();

    assert_eq!(
        *during.lock().unwrap(),
        Some((GenerationStatus::Pending, Some(first)))
    );
    assert_eq!(tracker.message(P1), Some(second));
}

#[test]
fn failed_regenerate_keeps_the_previous_message() {
    let fake = FakeBackend::new();
    let tracker = MessageTracker::default();
    let first = tracker.generate(&fake, P1).unwrap();

    fake.fail_generation_for(P1);
    assert!(tracker.generate(&fake, P1).is_err());

    assert_eq!(tracker.status(P1), GenerationStatus::Available);
    assert_eq!(tracker.message(P1), Some(first));
}

#[test]
fn same_property_cannot_be_generated_twice_at_once() {
    let fake = Arc::new(FakeBackend::new());
    let tracker = Arc::new(MessageTracker::default());
    let nested = Arc::new(Mutex::new(None));
    {
        let tracker = tracker.clone();
        let nested = nested.clone();
        let fake_inner = Arc::downgrade(&fake);
        fake.set_probe(move || {
            let mut slot = nested.lock().unwrap();
            if slot.is_none() {
                if let Some(fake) = fake_inner.upgrade() {
                    *slot = Some(tracker.generate(&*fake, P1).map(|_| ()));
                }
            }
        });
    }

    tracker.generate(&*fake, P1).unwrap();

    let nested_p1 = nested.lock().unwrap().take().unwrap();
    assert!(matches!(nested_p1, Err(GenerateError::AlreadyPending(id)) if id == P1));
    let generate_calls = fake
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Generate(_)))
        .count();
    assert_eq!(generate_calls, 1);
    assert_eq!(tracker.status(P1), GenerationStatus::Available);
}

#[test]
fn different_properties_are_tracked_independently() {
    let fake = Arc::new(FakeBackend::new());
    let tracker = Arc::new(MessageTracker::default());
    let observed = Arc::new(Mutex::new(Vec::new()));
    {
        let tracker = tracker.clone();
        let observed = observed.clone();
        let fake_inner = Arc::downgrade(&fake);
        fake.set_probe(move || {
            let first_call = observed.lock().unwrap().is_empty();
            if first_call {
                observed.lock().unwrap().push(tracker.pending_count());
                if let Some(fake) = fake_inner.upgrade() {
                    // Starts P2 while P1 is still in flight.
                    let _ = tracker.generate(&*fake, P2);
                }
            } else {
                observed.lock().unwrap().push(tracker.pending_count());
            }
        });
    }

    tracker.generate(&*fake, P1).unwrap();

    assert_eq!(*observed.lock().unwrap(), vec![1, 2]);
    assert_eq!(tracker.status(P1), GenerationStatus::Available);
    assert_eq!(tracker.status(P2), GenerationStatus::Available);
}

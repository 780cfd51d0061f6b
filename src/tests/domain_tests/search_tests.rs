use crate::domain::search::SearchError;
use crate::domain::{FilterCriteria, SearchOrchestrator};
use crate::tests::utils::{sample_property, Call, FakeBackend};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn success_replaces_the_whole_list() {
    let fake = FakeBackend::new();
    fake.push_search(vec![sample_property(1, "probate", 7), sample_property(2, "probate", 9)]);
    fake.push_search(vec![sample_property(3, "tax_delinquent", 8)]);
    let search = SearchOrchestrator::default();

    assert_eq!(search.search(&fake, &FilterCriteria::default()).unwrap(), 2);
    assert_eq!(search.search(&fake, &FilterCriteria::default()).unwrap(), 1);

    let ids: Vec<i64> = search.properties().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![3]);
    assert!(search.has_searched());
}

#[test]
fn sends_the_sanitized_criteria() {
    let fake = FakeBackend::new();
    let mut criteria = FilterCriteria::default();
    criteria.set_zip_code("30309");
    criteria.set_min_equity_percent("25");

    SearchOrchestrator::default().search(&fake, &criteria).unwrap();

    assert_eq!(fake.calls(), vec![Call::Search(criteria.sanitize())]);
}

#[test]
fn failure_keeps_the_previous_list() {
    let fake = FakeBackend::new();
    fake.push_search(vec![sample_property(1, "probate", 7)]);
    fake.push_search_failure();
    let search = SearchOrchestrator::default();

    search.search(&fake, &FilterCriteria::default()).unwrap();
    let err = search.search(&fake, &FilterCriteria::default()).unwrap_err();

    assert!(matches!(err, SearchError::Backend(ref e) if e.is_connectivity()));
    assert!(err.to_string().contains("Make sure the backend is running"));
    assert_eq!(search.properties().len(), 1);
}

fn loading_seen_during_call(succeed: bool) -> (bool, bool) {
    let fake = Arc::new(FakeBackend::new());
    if succeed {
        fake.push_search(vec![sample_property(1, "probate", 7)]);
    } else {
        fake.push_search_failure();
    }

    let search = Arc::new(SearchOrchestrator::default());
    let seen = Arc::new(AtomicBool::new(false));
    {
        let search = search.clone();
        let seen = seen.clone();
        fake.set_probe(move || seen.store(search.is_loading(), Ordering::SeqCst));
    }

    assert!(!search.is_loading());
    let _ = search.search(&*fake, &FilterCriteria::default());
    (seen.load(Ordering::SeqCst), search.is_loading())
}

#[test]
fn loading_flag_spans_a_successful_call() {
    assert_eq!(loading_seen_during_call(true), (true, false));
}

#[test]
fn loading_flag_spans_a_failed_call() {
    assert_eq!(loading_seen_during_call(false), (true, false));
}

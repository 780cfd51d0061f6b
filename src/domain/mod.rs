pub mod busy;
pub mod catalog;
pub mod feedback;
pub mod filters;
pub mod format;
pub mod messages;
pub mod results;
pub mod search;

pub use catalog::SituationCatalog;
pub use feedback::{FeedbackPanel, FeedbackView};
pub use filters::FilterCriteria;
pub use messages::{GenerationStatus, MessageTracker};
pub use results::{build_rows, PropertyRow};
pub use search::SearchOrchestrator;

use std::sync::{Mutex, MutexGuard, PoisonError};

// A panic in one request must not wedge the session state for the rest.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

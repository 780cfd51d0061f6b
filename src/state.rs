use crate::api::ProspectorApi;
use crate::domain::{
    build_rows, lock, FeedbackPanel, FilterCriteria, MessageTracker, PropertyRow,
    SearchOrchestrator, SituationCatalog,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-shot message shown at the top of the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// The session's state containers and the backend they talk to.
///
/// Each container guards its own data; none of them holds a lock while a
/// backend call is in flight.
pub struct AppState {
    pub api: Arc<dyn ProspectorApi>,
    pub catalog: SituationCatalog,
    pub search: SearchOrchestrator,
    pub messages: MessageTracker,
    pub feedback: FeedbackPanel,
    filters: Mutex<FilterCriteria>,
    notice: Mutex<Option<Notice>>,
}

impl AppState {
    pub fn new(api: Arc<dyn ProspectorApi>, catalog: SituationCatalog) -> Self {
        Self {
            api,
            catalog,
            search: SearchOrchestrator::default(),
            messages: MessageTracker::default(),
            feedback: FeedbackPanel::default(),
            filters: Mutex::new(FilterCriteria::default()),
            notice: Mutex::new(None),
        }
    }

    /// Startup loads: the situation catalog and the community feedback list.
    /// Neither failure stops the app.
    pub fn bootstrap(api: Arc<dyn ProspectorApi>) -> Self {
        let catalog = SituationCatalog::load(api.as_ref());
        let state = Self::new(api, catalog);
        state.feedback.load(state.api.as_ref());
        state
    }

    pub fn update_filters<R>(&self, f: impl FnOnce(&mut FilterCriteria) -> R) -> R {
        f(&mut lock(&self.filters))
    }

    pub fn filters(&self) -> FilterCriteria {
        lock(&self.filters).clone()
    }

    pub fn notify(&self, notice: Notice) {
        *lock(&self.notice) = Some(notice);
    }

    pub fn take_notice(&self) -> Option<Notice> {
        lock(&self.notice).take()
    }

    pub fn property_rows(&self) -> Vec<PropertyRow> {
        build_rows(self.search.properties(), &self.catalog, &self.messages)
    }
}

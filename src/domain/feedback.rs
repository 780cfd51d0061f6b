use crate::api::{ApiError, FeedbackItem, FeedbackType, ProspectorApi};
use crate::domain::busy::BusyFlag;
use crate::domain::lock;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{info, warn};

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Please enter your feedback")]
    EmptyMessage,

    #[error("Error submitting feedback. Please try again. ({0})")]
    Backend(#[from] ApiError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub message: String,
    pub kind: FeedbackType,
    pub submitter_name: String,
}

impl FeedbackDraft {
    /// The item as it is sent to the store. A blank name is sent as "Anonymous".
    pub fn to_item(&self, now: DateTime<Utc>) -> FeedbackItem {
        let name = self.submitter_name.trim();
        FeedbackItem {
            kind: self.kind,
            message: self.message.clone(),
            submitter_name: if name.is_empty() {
                ANONYMOUS.to_string()
            } else {
                name.to_string()
            },
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Read-only copy of the panel for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackView {
    pub draft: FeedbackDraft,
    pub show_list: bool,
    pub submitting: bool,
    pub items: Vec<FeedbackItem>,
}

#[derive(Debug, Default)]
struct Panel {
    draft: FeedbackDraft,
    show_list: bool,
    items: Vec<FeedbackItem>,
}

/// Community feedback: the draft being written and the suggestions list.
///
/// Nothing here touches search or message state.
#[derive(Debug, Default)]
pub struct FeedbackPanel {
    panel: Mutex<Panel>,
    submitting: BusyFlag,
}

impl FeedbackPanel {
    /// Replaces the suggestions list from the store. A failure is only
    /// logged and the current list stays.
    pub fn load(&self, api: &dyn ProspectorApi) -> bool {
        match api.list_feedback() {
            Ok(items) => {
                info!(count = items.len(), "loaded community feedback");
                lock(&self.panel).items = items;
                true
            }
            Err(e) => {
                warn!(error = %e, "could not load community feedback");
                false
            }
        }
    }

    pub fn set_message(&self, message: &str) {
        lock(&self.panel).draft.message = message.to_string();
    }

    pub fn set_kind(&self, kind: FeedbackType) {
        lock(&self.panel).draft.kind = kind;
    }

    pub fn set_submitter_name(&self, name: &str) {
        lock(&self.panel).draft.submitter_name = name.to_string();
    }

    /// Flips the suggestions list visibility and returns the new state.
    pub fn toggle_list(&self) -> bool {
        let mut panel = lock(&self.panel);
        panel.show_list = !panel.show_list;
        panel.show_list
    }

    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_busy()
    }

    #[cfg(test)]
    pub fn draft(&self) -> FeedbackDraft {
        lock(&self.panel).draft.clone()
    }

    #[cfg(test)]
    pub fn items(&self) -> Vec<FeedbackItem> {
        lock(&self.panel).items.clone()
    }

    pub fn view(&self) -> FeedbackView {
        let panel = lock(&self.panel);
        FeedbackView {
            draft: panel.draft.clone(),
            show_list: panel.show_list,
            submitting: self.submitting.is_busy(),
            items: panel.items.clone(),
        }
    }

    pub fn submit(&self, api: &dyn ProspectorApi) -> Result<(), FeedbackError> {
        self.submit_at(api, Utc::now())
    }

    /// Sends the draft stamped with `now`.
    ///
    /// A blank message is refused before anything is sent and the draft is
    /// left as typed. On success the message and name are cleared (the type
    /// is kept) and the list is reloaded. On failure the draft stays intact.
    pub fn submit_at(
        &self,
        api: &dyn ProspectorApi,
        now: DateTime<Utc>,
    ) -> Result<(), FeedbackError> {
        let item = {
            let panel = lock(&self.panel);
            if panel.draft.message.trim().is_empty() {
                return Err(FeedbackError::EmptyMessage);
            }
            panel.draft.to_item(now)
        };

        let _submitting = self.submitting.enter();
        api.submit_feedback(&item).map_err(|e| {
            warn!(error = %e, kind = %item.kind, "feedback submission failed");
            e
        })?;
        info!(kind = %item.kind, "feedback submitted");

        {
            let mut panel = lock(&self.panel);
            panel.draft.message.clear();
            panel.draft.submitter_name.clear();
        }

        self.load(api);
        Ok(())
    }
}

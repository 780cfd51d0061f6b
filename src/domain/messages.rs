use crate::api::{ApiError, GeneratedMessage, PropertyId, ProspectorApi};
use crate::domain::lock;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("A message for property {0} is already being generated")]
    AlreadyPending(PropertyId),

    #[error("Error generating message for property {id}. Please check the backend connection. ({source})")]
    Backend {
        id: PropertyId,
        #[source]
        source: ApiError,
    },
}

/// What the page shows for a property's outreach message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Absent,
    Pending,
    Available,
}

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    /// `previous` is the message a regenerate falls back to if it fails.
    Pending { previous: Option<GeneratedMessage> },
    Available(GeneratedMessage),
}

/// Per-property message state. A property with no entry is absent.
///
/// Properties are tracked independently: generating for one never touches
/// another's entry, and two properties may be pending at the same time.
#[derive(Debug, Default)]
pub struct MessageTracker {
    entries: Mutex<HashMap<PropertyId, Entry>>,
}

impl MessageTracker {
    /// Requests a message for `id`, or a fresh one if it already has one.
    ///
    /// A second request for a property that is still pending is refused
    /// without contacting the backend. When the backend call fails the
    /// property goes back to where it was before the call.
    pub fn generate(
        &self,
        api: &dyn ProspectorApi,
        id: PropertyId,
    ) -> Result<GeneratedMessage, GenerateError> {
        let pending = self.begin(id)?;

        match api.generate_message(id) {
            Ok(message) => {
                info!(property_id = %id, "generated outreach message");
                pending.complete(message.clone());
                Ok(message)
            }
            Err(source) => {
                warn!(property_id = %id, error = %source, "message generation failed");
                Err(GenerateError::Backend { id, source })
            }
        }
    }

    pub fn status(&self, id: PropertyId) -> GenerationStatus {
        match lock(&self.entries).get(&id) {
            None => GenerationStatus::Absent,
            Some(Entry::Pending { .. }) => GenerationStatus::Pending,
            Some(Entry::Available(_)) => GenerationStatus::Available,
        }
    }

    /// The stored message. While a regenerate is in flight this is still
    /// the message being replaced.
    pub fn message(&self, id: PropertyId) -> Option<GeneratedMessage> {
        match lock(&self.entries).get(&id) {
            Some(Entry::Available(message)) => Some(message.clone()),
            Some(Entry::Pending { previous }) => previous.clone(),
            None => None,
        }
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        lock(&self.entries)
            .values()
            .filter(|e| matches!(e, Entry::Pending { .. }))
            .count()
    }

    fn begin(&self, id: PropertyId) -> Result<Pending<'_>, GenerateError> {
        let mut entries = lock(&self.entries);
        let previous = match entries.remove(&id) {
            None => None,
            Some(Entry::Available(message)) => Some(message),
            Some(pending @ Entry::Pending { .. }) => {
                entries.insert(id, pending);
                return Err(GenerateError::AlreadyPending(id));
            }
        };
        entries.insert(id, Entry::Pending { previous });
        Ok(Pending { tracker: self, id })
    }
}

/// Owns a property's pending entry until the call resolves.
///
/// Dropping it without [`Pending::complete`] restores the prior state, so a
/// failed or panicking call never leaves the property stuck as pending.
struct Pending<'a> {
    tracker: &'a MessageTracker,
    id: PropertyId,
}

impl Pending<'_> {
    fn complete(self, message: GeneratedMessage) {
        lock(&self.tracker.entries).insert(self.id, Entry::Available(message));
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        let mut entries = lock(&self.tracker.entries);
        let previous = match entries.get_mut(&self.id) {
            Some(Entry::Pending { previous }) => previous.take(),
            _ => return,
        };
        match previous {
            Some(message) => entries.insert(self.id, Entry::Available(message)),
            None => entries.remove(&self.id),
        };
    }
}

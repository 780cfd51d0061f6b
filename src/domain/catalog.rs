use crate::api::{ProspectorApi, SituationType};
use tracing::{info, warn};

/// The backend's list of situation types, fetched once at startup.
#[derive(Debug, Clone, Default)]
pub struct SituationCatalog {
    types: Vec<SituationType>,
}

impl SituationCatalog {
    pub fn new(types: Vec<SituationType>) -> Self {
        Self { types }
    }

    /// Never fails: a backend error is logged and yields an empty catalog,
    /// which simply renders no situation checkboxes.
    pub fn load(api: &dyn ProspectorApi) -> Self {
        match api.situation_types() {
            Ok(types) => {
                info!(count = types.len(), "loaded situation catalog");
                Self::new(types)
            }
            Err(e) => {
                warn!(error = %e, "could not load situation catalog, filters will be empty");
                Self::default()
            }
        }
    }

    pub fn types(&self) -> &[SituationType] {
        &self.types
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Display label for a situation value, or the raw value when unknown.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.types
            .iter()
            .find(|t| t.value == value)
            .map(|t| t.label.as_str())
            .unwrap_or(value)
    }
}

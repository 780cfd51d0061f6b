use crate::api::{ApiError, Property, ProspectorApi};
use crate::domain::busy::BusyFlag;
use crate::domain::{lock, FilterCriteria};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Error searching properties. Make sure the backend is running. ({0})")]
    Backend(#[from] ApiError),
}

#[derive(Debug, Default)]
struct Results {
    properties: Vec<Property>,
    searched: bool,
}

/// Runs property searches and owns the displayed result list.
#[derive(Debug, Default)]
pub struct SearchOrchestrator {
    results: Mutex<Results>,
    loading: BusyFlag,
}

impl SearchOrchestrator {
    /// Sends the sanitized criteria and replaces the result list on success.
    ///
    /// On failure the previous list is kept. The loading flag is raised
    /// before the request goes out and lowered after the outcome is applied.
    /// Overlapping searches are not serialized; the last one to land wins.
    pub fn search(
        &self,
        api: &dyn ProspectorApi,
        criteria: &FilterCriteria,
    ) -> Result<usize, SearchError> {
        let request = criteria.sanitize();
        let _loading = self.loading.enter();

        let properties = api.search_properties(&request).map_err(|e| {
            warn!(error = %e, offline = e.is_connectivity(), "property search failed");
            e
        })?;

        let count = properties.len();
        info!(count, zip_code = ?request.zip_code, "property search complete");

        let mut results = lock(&self.results);
        results.properties = properties;
        results.searched = true;
        Ok(count)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_busy()
    }

    pub fn has_searched(&self) -> bool {
        lock(&self.results).searched
    }

    pub fn properties(&self) -> Vec<Property> {
        lock(&self.results).properties.clone()
    }
}

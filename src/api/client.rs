// client.rs
use crate::api::models::SituationTypesEnvelope;
use crate::api::{
    ApiError, FeedbackItem, GeneratedMessage, MessageRequest, Property, PropertyId, SearchRequest,
    SituationType,
};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("lead_prospector/", env!("CARGO_PKG_VERSION"));

const SITUATION_TYPES: &str = "/api/situation-types";
const PROPERTY_SEARCH: &str = "/api/properties/search";
const GENERATE_MESSAGE: &str = "/api/generate-message";
const FEEDBACK: &str = "/api/feedback";

/// Everything the front end needs from the prospecting backend.
///
/// Each call is a single attempt. Retrying, logging and telling the user
/// are left to the caller.
pub trait ProspectorApi: Send + Sync {
    fn situation_types(&self) -> Result<Vec<SituationType>, ApiError>;

    fn search_properties(&self, request: &SearchRequest) -> Result<Vec<Property>, ApiError>;

    fn generate_message(&self, property_id: PropertyId) -> Result<GeneratedMessage, ApiError>;

    fn list_feedback(&self) -> Result<Vec<FeedbackItem>, ApiError>;

    fn submit_feedback(&self, item: &FeedbackItem) -> Result<(), ApiError>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid base url {base_url:?}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!("{base_url:?} cannot be a base url")));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        let start = Instant::now();
        let resp = self
            .client
            .get(self.url(endpoint))
            .send()
            .map_err(|e| network_error(endpoint, e))?;
        debug!(endpoint, status = %resp.status(), elapsed = ?start.elapsed(), "backend responded");
        read_json(endpoint, resp)
    }

    fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let start = Instant::now();
        let resp = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .map_err(|e| network_error(endpoint, e))?;
        debug!(endpoint, status = %resp.status(), elapsed = ?start.elapsed(), "backend responded");
        Ok(resp)
    }
}

impl ProspectorApi for HttpBackend {
    fn situation_types(&self) -> Result<Vec<SituationType>, ApiError> {
        let envelope: SituationTypesEnvelope = self.get_json(SITUATION_TYPES)?;
        Ok(envelope.situation_types)
    }

    fn search_properties(&self, request: &SearchRequest) -> Result<Vec<Property>, ApiError> {
        let resp = self.post_json(PROPERTY_SEARCH, request)?;
        read_json(PROPERTY_SEARCH, resp)
    }

    fn generate_message(&self, property_id: PropertyId) -> Result<GeneratedMessage, ApiError> {
        let resp = self.post_json(GENERATE_MESSAGE, &MessageRequest { property_id })?;
        read_json(GENERATE_MESSAGE, resp)
    }

    fn list_feedback(&self) -> Result<Vec<FeedbackItem>, ApiError> {
        self.get_json(FEEDBACK)
    }

    fn submit_feedback(&self, item: &FeedbackItem) -> Result<(), ApiError> {
        let resp = self.post_json(FEEDBACK, item)?;
        ensure_success(FEEDBACK, resp).map(|_| ())
    }
}

fn network_error(endpoint: &str, err: reqwest::Error) -> ApiError {
    warn!(endpoint, error = %err, "backend request failed");
    ApiError::Network(err.to_string())
}

fn ensure_success(endpoint: &'static str, resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
    warn!(endpoint, %status, "backend rejected request");
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

fn read_json<T: DeserializeOwned>(endpoint: &'static str, resp: Response) -> Result<T, ApiError> {
    let resp = ensure_success(endpoint, resp)?;
    let text = resp
        .text()
        .map_err(|e| network_error(endpoint, e))?;

    serde_json::from_str(&text).map_err(|e| ApiError::MalformedResponse {
        endpoint,
        reason: e.to_string(),
    })
}

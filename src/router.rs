use crate::api::{FeedbackType, PropertyId};
use crate::errors::ServerError;
use crate::responses::{html_response, see_other, text_response, ResultResp};
use crate::state::{AppState, Notice};
use crate::templates::pages::{home_page, HomeVm};
use astra::Request;
use std::io::Read;
use tracing::debug;

// Form bodies are a handful of short fields.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    debug!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => html_response(home_page(&home_vm(state))),
        ("GET", ["health"]) => text_response("ok"),

        ("POST", ["filters"]) => {
            let form = read_form(&mut req)?;
            apply_filter_form(state, &form);
            see_other("/")
        }
        ("POST", ["filters", "situation"]) => {
            let form = read_form(&mut req)?;
            let value = form
                .first("value")
                .ok_or_else(|| ServerError::BadRequest("missing situation value".into()))?;
            state.update_filters(|f| f.toggle_situation_type(value));
            see_other("/")
        }
        ("POST", ["filters", "reset"]) => {
            state.update_filters(|f| f.clear());
            see_other("/")
        }

        ("POST", ["search"]) => {
            let form = read_form(&mut req)?;
            if !form.is_empty() {
                apply_filter_form(state, &form);
            }
            let criteria = state.filters();
            if let Err(e) = state.search.search(state.api.as_ref(), &criteria) {
                state.notify(Notice::error(e.to_string()));
            }
            see_other("/")
        }

        ("POST", ["properties", id, "message"]) => {
            let id: PropertyId = id
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid property id: {id}")))?;
            if let Err(e) = state.messages.generate(state.api.as_ref(), id) {
                state.notify(Notice::error(e.to_string()));
            }
            see_other(&format!("/#property-{id}"))
        }

        ("POST", ["feedback"]) => {
            let form = read_form(&mut req)?;
            apply_feedback_form(state, &form)?;
            match state.feedback.submit(state.api.as_ref()) {
                Ok(()) => state.notify(Notice::info("Thank you for your feedback!")),
                Err(e) => state.notify(Notice::error(e.to_string())),
            }
            see_other("/#feedback-form")
        }
        ("POST", ["feedback", "toggle"]) => {
            state.feedback.toggle_list();
            see_other("/#suggestions")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn home_vm(state: &AppState) -> HomeVm<'_> {
    HomeVm {
        catalog: &state.catalog,
        filters: state.filters(),
        rows: state.property_rows(),
        searching: state.search.is_loading(),
        has_searched: state.search.has_searched(),
        feedback: state.feedback.view(),
        notice: state.take_notice(),
    }
}

fn apply_filter_form(state: &AppState, form: &Form) {
    state.update_filters(|f| {
        f.set_zip_code(form.first("zip_code").unwrap_or_default());
        f.set_min_equity_percent(form.first("min_equity").unwrap_or_default());
        f.set_max_equity_percent(form.first("max_equity").unwrap_or_default());
        f.set_min_value(form.first("min_value").unwrap_or_default());
        f.set_max_value(form.first("max_value").unwrap_or_default());
        f.set_min_motivation(form.first("min_motivation").unwrap_or_default());
        f.set_situation_types(form.all("situation_types"));
    });
}

fn apply_feedback_form(state: &AppState, form: &Form) -> Result<(), ServerError> {
    if let Some(kind) = form.first("type") {
        let kind: FeedbackType = kind.parse().map_err(ServerError::BadRequest)?;
        state.feedback.set_kind(kind);
    }
    if let Some(message) = form.first("message") {
        state.feedback.set_message(message);
    }
    if let Some(name) = form.first("submitter_name") {
        state.feedback.set_submitter_name(name);
    }
    Ok(())
}

/// Decoded `application/x-www-form-urlencoded` body, repeated keys kept in order.
#[derive(Debug, Default)]
pub struct Form {
    pairs: Vec<(String, String)>,
}

impl Form {
    pub fn parse(body: &[u8]) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(body).into_owned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn read_form(req: &mut Request) -> Result<Form, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }
    Ok(Form::parse(&body))
}

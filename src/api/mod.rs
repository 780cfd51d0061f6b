mod api_error;
mod client;
mod models;

pub use api_error::ApiError;
pub use client::{HttpBackend, ProspectorApi};
pub use models::{
    FeedbackItem, FeedbackType, GeneratedMessage, MessageRequest, Property, PropertyId,
    SearchRequest, SituationType,
};

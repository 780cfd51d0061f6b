use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// GET  /api/situation-types   -> { situation_types: [SituationType] }
// POST /api/properties/search -> [Property]
// POST /api/generate-message  -> { generated_message, property_id, situation_type, ... }
// GET  /api/feedback          -> [FeedbackItem]
// POST /api/feedback          <- FeedbackItem

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub i64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PropertyId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SituationType {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SituationTypesEnvelope {
    pub situation_types: Vec<SituationType>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub owner_name: String,
    pub situation_type: String,

    /// 0-10, higher means a faster likely sale.
    pub motivation_score: u8,
    pub estimated_value: i64,
    /// Owner's equity as a fraction of `estimated_value`.
    pub equity_percentage: f64,
    pub liens_amount: i64,
    pub days_in_situation: i64,

    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Search body. Unset criteria are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_equity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_motivation: Option<u8>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MessageRequest {
    pub property_id: PropertyId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedMessage {
    pub generated_message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FeedbackType {
    #[default]
    Feature,
    Improvement,
    Bug,
    General,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::Feature,
        FeedbackType::Improvement,
        FeedbackType::Bug,
        FeedbackType::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackType::Feature => "feature",
            FeedbackType::Improvement => "improvement",
            FeedbackType::Bug => "bug",
            FeedbackType::General => "general",
        }
    }

    /// Option text in the suggestion type picker.
    pub fn describe(self) -> &'static str {
        match self {
            FeedbackType::Feature => "New Feature Request",
            FeedbackType::Improvement => "Improve Existing Feature",
            FeedbackType::Bug => "Bug Report",
            FeedbackType::General => "General Feedback",
        }
    }
}

// Unknown types from the store render as general feedback instead of failing the whole list.
impl From<String> for FeedbackType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(FeedbackType::General)
    }
}

impl FromStr for FeedbackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feature" => Ok(FeedbackType::Feature),
            "improvement" => Ok(FeedbackType::Improvement),
            "bug" => Ok(FeedbackType::Bug),
            "general" => Ok(FeedbackType::General),
            other => Err(format!("unknown feedback type: {other}")),
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackType,
    pub message: String,
    pub submitter_name: String,
    /// ISO-8601, as produced by the submitting client.
    pub timestamp: String,
}

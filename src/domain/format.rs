// Display helpers shared by the templates.

use crate::api::FeedbackType;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Foreground and background colors for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyle {
    pub color: &'static str,
    pub background: &'static str,
}

impl TagStyle {
    pub fn css(&self) -> String {
        format!("color: {}; background-color: {};", self.color, self.background)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotivationTier {
    High,
    Medium,
    Low,
}

impl MotivationTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            8.. => MotivationTier::High,
            6..=7 => MotivationTier::Medium,
            _ => MotivationTier::Low,
        }
    }

    pub fn style(self) -> TagStyle {
        match self {
            MotivationTier::High => TagStyle {
                color: "#dc2626",
                background: "#fee2e2",
            },
            MotivationTier::Medium => TagStyle {
                color: "#d97706",
                background: "#fef3c7",
            },
            MotivationTier::Low => TagStyle {
                color: "#16a34a",
                background: "#dcfce7",
            },
        }
    }
}

pub fn feedback_style(kind: FeedbackType) -> TagStyle {
    match kind {
        FeedbackType::Feature => TagStyle {
            color: "#1e40af",
            background: "#dbeafe",
        },
        FeedbackType::Improvement => TagStyle {
            color: "#d97706",
            background: "#fef3c7",
        },
        FeedbackType::Bug => TagStyle {
            color: "#dc2626",
            background: "#fee2e2",
        },
        FeedbackType::General => TagStyle {
            color: "#374151",
            background: "#f3f4f6",
        },
    }
}

/// "feature" -> "Feature"
pub fn feedback_label(kind: FeedbackType) -> String {
    let raw = kind.as_str();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whole US dollars with thousands separators: 450000 -> "$450,000".
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// 0.25 -> "25%"
pub fn format_percentage(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Month/day/year for a feedback timestamp, e.g. "9/2/2025".
///
/// Accepts RFC 3339, naive ISO date-times and plain dates. Anything else is
/// shown as received.
pub fn format_feedback_date(timestamp: &str) -> String {
    const DATE: &str = "%-m/%-d/%Y";
    let ts = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.format(DATE).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DATE).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(ts, "%Y-%m-%d") {
        return d.format(DATE).to_string();
    }
    timestamp.to_string()
}

// src/domain/filters.rs

use crate::api::SearchRequest;
use std::str::FromStr;

/// Choices offered by the minimum motivation picker: (value, label).
pub const MOTIVATION_CHOICES: [(u8, &str); 3] =
    [(6, "6+ (Good)"), (8, "8+ (High)"), (9, "9+ (Very High)")];

pub const MAX_MOTIVATION: u8 = 10;

/// Search criteria as the user entered them.
///
/// Equity bounds are held as fractions (0.25) but edited as whole
/// percentages (25). Text inputs that are empty or do not parse leave the
/// field unset rather than raising an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    zip_code: String,
    // Ordered set: insertion order is kept, duplicates never are.
    situation_types: Vec<String>,
    min_equity: Option<f64>,
    max_equity: Option<f64>,
    min_value: Option<i64>,
    max_value: Option<i64>,
    min_motivation: Option<u8>,
}

impl FilterCriteria {
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    #[cfg(test)]
    pub fn situation_types(&self) -> &[String] {
        &self.situation_types
    }

    #[cfg(test)]
    pub fn min_equity(&self) -> Option<f64> {
        self.min_equity
    }

    #[cfg(test)]
    pub fn max_equity(&self) -> Option<f64> {
        self.max_equity
    }

    pub fn min_value(&self) -> Option<i64> {
        self.min_value
    }

    pub fn max_value(&self) -> Option<i64> {
        self.max_value
    }

    pub fn min_motivation(&self) -> Option<u8> {
        self.min_motivation
    }

    pub fn min_equity_percent(&self) -> Option<u32> {
        self.min_equity.map(fraction_to_percent)
    }

    pub fn max_equity_percent(&self) -> Option<u32> {
        self.max_equity.map(fraction_to_percent)
    }

    pub fn is_selected(&self, situation_type: &str) -> bool {
        self.situation_types.iter().any(|s| s == situation_type)
    }

    pub fn set_zip_code(&mut self, input: &str) {
        self.zip_code = input.trim().to_string();
    }

    /// Adds the value when absent, removes it when present.
    pub fn toggle_situation_type(&mut self, value: &str) {
        if let Some(pos) = self.situation_types.iter().position(|s| s == value) {
            self.situation_types.remove(pos);
        } else if !value.is_empty() {
            self.situation_types.push(value.to_string());
        }
    }

    /// Replaces the selection wholesale, as a submitted checkbox group does.
    pub fn set_situation_types<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.situation_types.clear();
        for value in values {
            let value = value.as_ref();
            if !value.is_empty() && !self.is_selected(value) {
                self.situation_types.push(value.to_string());
            }
        }
    }

    pub fn set_min_equity_percent(&mut self, input: &str) {
        self.min_equity = percent_to_fraction(input);
    }

    pub fn set_max_equity_percent(&mut self, input: &str) {
        self.max_equity = percent_to_fraction(input);
    }

    pub fn set_min_value(&mut self, input: &str) {
        self.min_value = parse_dollars(input);
    }

    pub fn set_max_value(&mut self, input: &str) {
        self.max_value = parse_dollars(input);
    }

    pub fn set_min_motivation(&mut self, input: &str) {
        self.min_motivation = parse_optional::<u8>(input).filter(|m| *m <= MAX_MOTIVATION);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds the request body, leaving out every field that is unset,
    /// an empty string, or an empty selection.
    pub fn sanitize(&self) -> SearchRequest {
        SearchRequest {
            zip_code: Some(self.zip_code.clone()).filter(|z| !z.is_empty()),
            situation_types: Some(self.situation_types.clone()).filter(|s| !s.is_empty()),
            min_equity: self.min_equity,
            max_equity: self.max_equity,
            min_value: self.min_value,
            max_value: self.max_value,
            min_motivation: self.min_motivation,
        }
    }
}

pub fn fraction_to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().max(0.0) as u32
}

/// Parses a whole-number percentage ("25") into a fraction (0.25).
/// Anything outside (0, 100] is treated as unset.
pub fn percent_to_fraction(input: &str) -> Option<f64> {
    parse_optional::<f64>(input.trim().trim_end_matches('%'))
        .filter(|p| p.is_finite() && *p > 0.0 && *p <= 100.0)
        .map(|p| p / 100.0)
}

fn parse_dollars(input: &str) -> Option<i64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    parse_optional::<i64>(&cleaned).filter(|v| *v >= 0)
}

fn parse_optional<T: FromStr>(input: &str) -> Option<T> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    input.parse().ok()
}

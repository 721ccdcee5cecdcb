use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tripr_catalog::{PreferenceTag, Season};
use tripr_common::error::{TriprError, TriprResult};
use tripr_filter::{SortMode, UserQuery};

pub const INVALID_FORM_MESSAGE: &str = "Please fill out all fields with valid numbers.";

/// The "suggest spots" form: one preference tag, a per-person budget and a
/// party size. All three are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestForm {
    pub preference: String,
    pub budget: String,
    pub people: String,
    pub sort: String,
}

impl SuggestForm {
    pub fn parse(&self) -> TriprResult<UserQuery> {
        let invalid = || TriprError::Validation(INVALID_FORM_MESSAGE.to_string());

        let preference = PreferenceTag::new(&self.preference);
        if preference.is_blank() {
            return Err(invalid());
        }

        let budget: f64 = self.budget.trim().parse().map_err(|_| invalid())?;
        if !budget.is_finite() || budget <= 0.0 {
            return Err(invalid());
        }

        let people = leading_integer(&self.people)
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid)?;

        Ok(UserQuery {
            preference: Some(preference),
            budget_per_person: Some(budget),
            party_size: Some(people),
            sort: parse_sort(&self.sort)?,
            ..UserQuery::default()
        })
    }
}

/// The trip browser's filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripFilterForm {
    pub q: String,
    pub location: String,
    pub min_price: String,
    pub max_price: String,
    pub min_rating: String,
    /// Comma-separated season names.
    pub seasons: String,
    pub sort: String,
}

impl Default for TripFilterForm {
    /// The values the "clear" button restores.
    fn default() -> Self {
        Self {
            q: String::new(),
            location: String::new(),
            min_price: "0".to_string(),
            max_price: "10000".to_string(),
            min_rating: "0".to_string(),
            seasons: String::new(),
            sort: String::new(),
        }
    }
}

impl TripFilterForm {
    pub fn parse(&self) -> TriprResult<UserQuery> {
        Ok(UserQuery {
            text: optional_text(&self.q),
            location: optional_text(&self.location),
            min_price: optional_number("min_price", &self.min_price)?,
            max_price: optional_number("max_price", &self.max_price)?,
            min_rating: optional_number("min_rating", &self.min_rating)?,
            seasons: parse_seasons(&self.seasons)?,
            sort: parse_sort(&self.sort)?,
            ..UserQuery::default()
        })
    }

    /// Query produced by a cleared form.
    pub fn cleared_query() -> UserQuery {
        UserQuery {
            min_price: Some(0.0),
            max_price: Some(10_000.0),
            min_rating: Some(0.0),
            ..UserQuery::default()
        }
    }
}

/// Integer prefix of `raw`, so "2.5" and "3 people" read as 2 and 3.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional_number(field: &str, raw: &str) -> TriprResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(TriprError::Validation(format!(
            "{field} must be a number, got: {trimmed}"
        ))),
    }
}

fn parse_seasons(raw: &str) -> TriprResult<BTreeSet<Season>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Season>().map_err(TriprError::Validation))
        .collect()
}

fn parse_sort(raw: &str) -> TriprResult<SortMode> {
    raw.parse::<SortMode>().map_err(TriprError::Validation)
}

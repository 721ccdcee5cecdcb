use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
    Monsoon,
    Spring,
}

impl Season {
    pub const ALL: [Season; 4] = [Self::Summer, Self::Winter, Self::Monsoon, Self::Spring];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Winter => "Winter",
            Self::Monsoon => "Monsoon",
            Self::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| format!("unknown season: {value}"))
    }
}

/// Per-person cost bounds, inclusive. Serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct BudgetRange {
    min: f64,
    max: f64,
}

impl BudgetRange {
    /// Bounds given in the wrong order are swapped.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

impl From<[f64; 2]> for BudgetRange {
    fn from(bounds: [f64; 2]) -> Self {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<BudgetRange> for [f64; 2] {
    fn from(range: BudgetRange) -> Self {
        [range.min, range.max]
    }
}

/// Category key partitioning the spot catalog, e.g. `adventure` or `city_life`.
///
/// Keys are normalized on construction: trimmed, lowercased, with spaces and
/// hyphens folded into underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PreferenceTag(String);

impl PreferenceTag {
    pub fn new(raw: &str) -> Self {
        let key = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Human label: `city_life` becomes `City Life`.
    pub fn label(&self) -> String {
        self.0
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl From<String> for PreferenceTag {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for PreferenceTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PreferenceTag> for String {
    fn from(tag: PreferenceTag) -> Self {
        tag.0
    }
}

impl fmt::Display for PreferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<BudgetRange>,
}

impl Destination {
    pub fn new(name: &str, description: &str, image_url: &str, budget: Option<[f64; 2]>) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            image_url: image_url.to_owned(),
            budget_range: budget.map(BudgetRange::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub title: String,
    pub location: String,
    pub price: f64,
    pub rating: f64,
    pub season: Season,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_parses_case_insensitively() {
        assert_eq!("monsoon".parse::<Season>().unwrap(), Season::Monsoon);
        assert_eq!(" WINTER ".parse::<Season>().unwrap(), Season::Winter);
        assert!("autumn".parse::<Season>().is_err());
    }

    #[test]
    fn budget_range_is_inclusive_and_ordered() {
        let range = BudgetRange::new(300.0, 100.0);
        assert_eq!(range.min(), 100.0);
        assert_eq!(range.max(), 300.0);
        assert!(range.contains(100.0));
        assert!(range.contains(300.0));
        assert!(!range.contains(300.5));
    }

    #[test]
    fn budget_range_serializes_as_pair() {
        let json = serde_json::to_value(BudgetRange::new(500.0, 1000.0)).unwrap();
        assert_eq!(json, serde_json::json!([500.0, 1000.0]));
    }

    #[test]
    fn preference_tag_normalizes_keys() {
        assert_eq!(PreferenceTag::new(" City Life ").as_str(), "city_life");
        assert_eq!(PreferenceTag::new("cultural-heritage").as_str(), "cultural_heritage");
        assert_eq!(PreferenceTag::new("city_life").label(), "City Life");
        assert!(PreferenceTag::new("   ").is_blank());
    }
}

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tripr_catalog::{PreferenceTag, Season};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating_desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    /// Accepts the select values used by the trip browser, where `rating`
    /// means highest rated first and a blank value means no sort.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" | "none" => Ok(Self::None),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "rating" | "rating_desc" => Ok(Self::RatingDesc),
            other => Err(format!("unknown sort mode: {other}")),
        }
    }
}

/// Every constraint a filter action can carry. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    /// Case-insensitive substring of the title.
    pub text: Option<String>,
    /// Case-insensitive substring of the location.
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub seasons: BTreeSet<Season>,
    #[serde(default)]
    pub sort: SortMode,
    pub preference: Option<PreferenceTag>,
    pub budget_per_person: Option<f64>,
    pub party_size: Option<u32>,
}

impl UserQuery {
    /// `budget_per_person × party_size`, when both are known.
    pub fn total_budget(&self) -> Option<f64> {
        match (self.budget_per_person, self.party_size) {
            (Some(budget), Some(people)) => Some(budget * f64::from(people)),
            _ => None,
        }
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Blank strings count as "not provided".
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

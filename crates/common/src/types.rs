use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}

/// Interest tags offered by the itinerary planner form.
pub const PREFERENCE_KEYS: [&str; 5] = [
    "culturalHeritage",
    "festivals",
    "adventure",
    "food",
    "shopping",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Cheap,
    #[default]
    Moderate,
    Luxury,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cheap => "cheap",
            Self::Moderate => "moderate",
            Self::Luxury => "luxury",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cheap => "Budget Traveler",
            Self::Moderate => "Comfortable",
            Self::Luxury => "Luxury Experience",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "cheap" => Ok(Self::Cheap),
            "moderate" => Ok(Self::Moderate),
            "luxury" => Ok(Self::Luxury),
            _ => Err(format!("unknown budget tier: {value}")),
        }
    }
}

/// Selected interest tags, serialized as a `{tag: bool}` JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences(BTreeMap<String, bool>);

impl Preferences {
    /// Every planner tag present and unselected.
    pub fn with_default_keys() -> Self {
        Self(
            PREFERENCE_KEYS
                .iter()
                .map(|key| ((*key).to_owned(), false))
                .collect(),
        )
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Returns a copy with `key` flipped. Unknown keys are inserted as selected.
    pub fn toggled(&self, key: &str) -> Self {
        let mut next = self.0.clone();
        let current = next.get(key).copied().unwrap_or(false);
        next.insert(key.to_owned(), !current);
        Self(next)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, on)| **on)
            .map(|(key, _)| key.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for Preferences {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub budget: BudgetTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub duration: String,
    pub cost: String,
    pub crowd_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryRequest {
    pub preferences: Preferences,
    pub budget: BudgetTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryData {
    pub itinerary: Vec<DayPlan>,
}

/// `{success, message}` acknowledgement with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupAddResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

/// `{success, data, message}` body shared by the planner endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_tier_round_trips_lowercase() {
        let json = serde_json::to_string(&BudgetTier::Luxury).unwrap();
        assert_eq!(json, "\"luxury\"");
        assert_eq!("cheap".parse::<BudgetTier>().unwrap(), BudgetTier::Cheap);
        assert!("premium".parse::<BudgetTier>().is_err());
    }

    #[test]
    fn budget_tier_labels_are_display_names() {
        assert_eq!(BudgetTier::Cheap.label(), "Budget Traveler");
        assert_eq!(BudgetTier::default().label(), "Comfortable");
    }

    #[test]
    fn preferences_toggle_returns_new_value() {
        let prefs = Preferences::with_default_keys();
        let next = prefs.toggled("adventure");
        assert!(!prefs.is_selected("adventure"));
        assert!(next.is_selected("adventure"));
        assert_eq!(next.selected().collect::<Vec<_>>(), vec!["adventure"]);
    }

    #[test]
    fn preferences_serialize_as_plain_object() {
        let prefs: Preferences = [("food".to_string(), true)].into_iter().collect();
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json, serde_json::json!({ "food": true }));
    }

    #[test]
    fn user_preferences_default_matches_empty_profile() {
        let json = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "preferences": {}, "budget": "moderate" })
        );
    }

    #[test]
    fn activity_uses_camel_case_crowd_level() {
        let activity: Activity = serde_json::from_value(serde_json::json!({
            "time": "09:00",
            "activity": "Visit Museum",
            "duration": "2h",
            "cost": "$20",
            "crowdLevel": "Low"
        }))
        .unwrap();
        assert_eq!(activity.crowd_level, "Low");
    }

    #[test]
    fn envelope_without_data_deserializes() {
        let env: ApiEnvelope<ChatReply> =
            serde_json::from_value(serde_json::json!({ "success": false })).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
    }
}

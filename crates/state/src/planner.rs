use serde::{Deserialize, Serialize};
use tripr_catalog::Season;
use tripr_common::types::{BudgetTier, Preferences};
use tripr_filter::{SortMode, UserQuery};
use tripr_render::Theme;

use crate::forms::TripFilterForm;

/// Everything the planner front-end holds between user actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerState {
    pub preferences: Preferences,
    pub budget: BudgetTier,
    pub query: UserQuery,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            preferences: Preferences::with_default_keys(),
            budget: BudgetTier::default(),
            query: TripFilterForm::cleared_query(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    TogglePreference(String),
    SetBudget(BudgetTier),
    /// Replace the whole query, e.g. after a form submit.
    ApplyQuery(UserQuery),
    ToggleSeason(Season),
    SetSort(SortMode),
    ClearFilters,
    ToggleDarkMode,
}

/// Apply `action` to `state`, returning the next state. `state` is not modified.
pub fn reduce(state: &PlannerState, action: Action) -> PlannerState {
    let mut next = state.clone();
    match action {
        Action::TogglePreference(key) => next.preferences = state.preferences.toggled(&key),
        Action::SetBudget(tier) => next.budget = tier,
        Action::ApplyQuery(query) => next.query = query,
        Action::ToggleSeason(season) => {
            if !next.query.seasons.remove(&season) {
                next.query.seasons.insert(season);
            }
        }
        Action::SetSort(sort) => next.query.sort = sort,
        Action::ClearFilters => next.query = TripFilterForm::cleared_query(),
        Action::ToggleDarkMode => next.theme = state.theme.toggled(),
    }
    next
}

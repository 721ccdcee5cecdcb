pub mod forms;
pub mod planner;

pub use forms::{SuggestForm, TripFilterForm, INVALID_FORM_MESSAGE};
pub use planner::{reduce, Action, PlannerState};

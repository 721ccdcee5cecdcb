pub mod engine;
pub mod listing;
pub mod predicates;
pub mod query;

pub use engine::{filter_and_sort, suggest_spots, FilterOutcome};
pub use listing::Listing;
pub use query::{SortMode, UserQuery};

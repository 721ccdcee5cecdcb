pub mod models;
pub mod spots;
pub mod trips;

pub use models::{BudgetRange, Destination, PreferenceTag, Season, Trip};
pub use spots::SpotCatalog;
pub use trips::builtin_trips;

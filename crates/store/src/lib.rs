pub mod group;
pub mod preferences;

pub mod budget;
pub mod price;
pub mod rating;
pub mod season;
pub mod text;

use crate::listing::Listing;
use crate::query::{non_blank, UserQuery};

use budget::TotalBudgetPredicate;
use price::PriceRangePredicate;
use rating::RatingFloorPredicate;
use season::SeasonPredicate;
use text::{LocationContainsPredicate, TitleContainsPredicate};

pub trait Predicate: Send + Sync {
    fn name(&self) -> &'static str;
    fn matches(&self, item: &dyn Listing) -> bool;
}

/// Predicates for the constraints `query` actually sets. An empty list
/// matches everything.
pub fn active_predicates(query: &UserQuery) -> Vec<Box<dyn Predicate>> {
    let mut predicates: Vec<Box<dyn Predicate>> = Vec::new();

    if let Some(text) = non_blank(&query.text) {
        predicates.push(Box::new(TitleContainsPredicate::new(text)));
    }
    if let Some(location) = non_blank(&query.location) {
        predicates.push(Box::new(LocationContainsPredicate::new(location)));
    }
    if query.min_price.is_some() || query.max_price.is_some() {
        predicates.push(Box::new(PriceRangePredicate {
            min: query.min_price,
            max: query.max_price,
        }));
    }
    if let Some(floor) = query.min_rating.filter(|r| *r > 0.0) {
        predicates.push(Box::new(RatingFloorPredicate { floor }));
    }
    if !query.seasons.is_empty() {
        predicates.push(Box::new(SeasonPredicate {
            seasons: query.seasons.clone(),
        }));
    }
    if let Some(total) = query.total_budget() {
        predicates.push(Box::new(TotalBudgetPredicate { total }));
    }

    predicates
}

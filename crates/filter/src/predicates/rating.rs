use crate::listing::Listing;

use super::Predicate;

pub struct RatingFloorPredicate {
    pub floor: f64,
}

impl Predicate for RatingFloorPredicate {
    fn name(&self) -> &'static str {
        "rating_floor"
    }

    fn matches(&self, item: &dyn Listing) -> bool {
        item.rating().is_some_and(|r| r >= self.floor)
    }
}

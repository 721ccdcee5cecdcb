use crate::listing::Listing;

use super::Predicate;

/// `price ∈ [min, max]`; an open bound does not constrain.
pub struct PriceRangePredicate {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Predicate for PriceRangePredicate {
    fn name(&self) -> &'static str {
        "price_range"
    }

    fn matches(&self, item: &dyn Listing) -> bool {
        let Some(price) = item.price() else {
            return false;
        };
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

use crate::listing::Listing;

use super::Predicate;

/// The party's total budget must land inside the record's per-person range.
pub struct TotalBudgetPredicate {
    pub total: f64,
}

impl Predicate for TotalBudgetPredicate {
    fn name(&self) -> &'static str {
        "total_budget"
    }

    fn matches(&self, item: &dyn Listing) -> bool {
        item.budget_range()
            .is_some_and(|range| range.contains(self.total))
    }
}

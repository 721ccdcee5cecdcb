use std::collections::BTreeSet;

use tripr_catalog::Season;

use crate::listing::Listing;

use super::Predicate;

pub struct SeasonPredicate {
    pub seasons: BTreeSet<Season>,
}

impl Predicate for SeasonPredicate {
    fn name(&self) -> &'static str {
        "season"
    }

    fn matches(&self, item: &dyn Listing) -> bool {
        if self.seasons.is_empty() {
            return true;
        }
        item.season().is_some_and(|s| self.seasons.contains(&s))
    }
}

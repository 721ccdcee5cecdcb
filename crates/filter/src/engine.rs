use std::cmp::Ordering;

use serde::Serialize;
use tripr_catalog::{Destination, SpotCatalog};

use crate::listing::Listing;
use crate::predicates::{active_predicates, Predicate};
use crate::query::{SortMode, UserQuery};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOutcome<L> {
    pub items: Vec<L>,
    /// How many records passed every predicate.
    pub matched: usize,
    /// `items` is the preference tag's full list because nothing matched.
    pub fallback: bool,
}

impl<L> FilterOutcome<L> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn passes(predicates: &[Box<dyn Predicate>], item: &dyn Listing) -> bool {
    for predicate in predicates {
        if !predicate.matches(item) {
            tracing::trace!(item = item.title(), rule = predicate.name(), "rejected");
            return false;
        }
    }
    true
}

// Records missing the key sort after those that have it.
fn by_key(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_listings<L: Listing>(items: &mut [L], mode: SortMode) {
    // `sort_by` is stable, so ties keep catalog order.
    match mode {
        SortMode::None => {}
        SortMode::PriceAsc => items.sort_by(|a, b| by_key(a.price(), b.price(), false)),
        SortMode::PriceDesc => items.sort_by(|a, b| by_key(a.price(), b.price(), true)),
        SortMode::RatingDesc => items.sort_by(|a, b| by_key(a.rating(), b.rating(), true)),
    }
}

/// Keep the records of `catalog` that satisfy every constraint in `query`,
/// then order them by `query.sort`. The catalog is left untouched.
pub fn filter_and_sort<L>(catalog: &[L], query: &UserQuery) -> Vec<L>
where
    L: Listing + Clone,
{
    let predicates = active_predicates(query);
    let mut items: Vec<L> = catalog
        .iter()
        .filter(|item| passes(&predicates, *item))
        .cloned()
        .collect();
    sort_listings(&mut items, query.sort);
    items
}

/// Destinations for `query.preference`, filtered and sorted.
///
/// When nothing for the chosen tag survives the filters, the tag's full list
/// is returned instead (still sorted) and `fallback` is set. A missing or
/// unknown tag yields an empty outcome.
pub fn suggest_spots(catalog: &SpotCatalog, query: &UserQuery) -> FilterOutcome<Destination> {
    let Some(tag) = query.preference.as_ref().filter(|t| !t.is_blank()) else {
        return FilterOutcome {
            items: Vec::new(),
            matched: 0,
            fallback: false,
        };
    };

    let spots = catalog.get(tag);
    let items = filter_and_sort(spots, query);
    if !items.is_empty() || spots.is_empty() {
        return FilterOutcome {
            matched: items.len(),
            items,
            fallback: false,
        };
    }

    tracing::debug!(tag = %tag, total = ?query.total_budget(), "no spot matched, using full list");
    let mut items = spots.to_vec();
    sort_listings(&mut items, query.sort);
    FilterOutcome {
        items,
        matched: 0,
        fallback: true,
    }
}

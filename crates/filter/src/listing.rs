use tripr_catalog::{BudgetRange, Destination, Season, Trip};

/// Read-only view the filter engine needs from a catalog record.
///
/// Attributes a record does not carry return `None`.
pub trait Listing {
    fn title(&self) -> &str;
    fn location(&self) -> Option<&str>;
    fn price(&self) -> Option<f64>;
    fn rating(&self) -> Option<f64>;
    fn season(&self) -> Option<Season>;
    fn budget_range(&self) -> Option<BudgetRange>;
}

impl Listing for Trip {
    fn title(&self) -> &str {
        &self.title
    }

    fn location(&self) -> Option<&str> {
        Some(&self.location)
    }

    fn price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn season(&self) -> Option<Season> {
        Some(self.season)
    }

    fn budget_range(&self) -> Option<BudgetRange> {
        None
    }
}

// A destination's name doubles as its location ("Kyoto, Japan"), and its
// entry price is the low end of the per-person budget.
impl Listing for Destination {
    fn title(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn price(&self) -> Option<f64> {
        self.budget_range.map(|r| r.min())
    }

    fn rating(&self) -> Option<f64> {
        None
    }

    fn season(&self) -> Option<Season> {
        None
    }

    fn budget_range(&self) -> Option<BudgetRange> {
        self.budget_range
    }
}

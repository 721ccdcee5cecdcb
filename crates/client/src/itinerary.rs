use std::fmt;

use tripr_common::types::{BudgetTier, DayPlan, Preferences};

use crate::client::{ClientError, TripClient};

pub const ITINERARY_FALLBACK: &str = "Sorry, I couldn't generate an itinerary. Please try again.";

/// The itinerary currently on screen. A failed request keeps the previous
/// itinerary and sets a notice.
#[derive(Debug, Default)]
pub struct ItineraryView {
    days: Vec<DayPlan>,
    loading: bool,
    notice: Option<String>,
}

impl ItineraryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.notice = None;
    }

    pub fn resolve(&mut self, outcome: Result<Vec<DayPlan>, ClientError>) {
        self.loading = false;
        match outcome {
            Ok(days) => self.days = days,
            Err(err) => {
                tracing::warn!(error = %err, "itinerary request failed");
                self.notice = Some(ITINERARY_FALLBACK.to_owned());
            }
        }
    }

    pub async fn generate(
        &mut self,
        client: &TripClient,
        preferences: &Preferences,
        budget: BudgetTier,
    ) {
        self.begin();
        let outcome = client.generate_itinerary(preferences, budget).await;
        self.resolve(outcome);
    }
}

impl fmt::Display for ItineraryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loading {
            return writeln!(f, "Generating...");
        }
        if let Some(notice) = &self.notice {
            writeln!(f, "{notice}")?;
        }
        for plan in &self.days {
            writeln!(f, "Day {}", plan.day)?;
            for a in &plan.activities {
                writeln!(f, "  {} - {} ({})", a.time, a.activity, a.duration)?;
            }
        }
        Ok(())
    }
}

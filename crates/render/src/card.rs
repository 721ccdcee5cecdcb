use tripr_catalog::{Destination, Trip};

/// One result card, independent of the surface that draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub image_url: String,
    pub details: Vec<String>,
}

pub trait ToCard {
    fn to_card(&self) -> Card;
}

/// `3500.0` prints as `3500`, `4.5` stays `4.5`.
pub(crate) fn amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

impl ToCard for Trip {
    fn to_card(&self) -> Card {
        Card {
            title: self.title.clone(),
            image_url: self.image_url.clone(),
            details: vec![
                format!(
                    "{} · ₹{} · ⭐{}",
                    self.location,
                    amount(self.price),
                    amount(self.rating)
                ),
                format!("Season: {}", self.season),
            ],
        }
    }
}

impl ToCard for Destination {
    fn to_card(&self) -> Card {
        let mut details = vec![self.description.clone()];
        if let Some(range) = self.budget_range {
            details.push(format!(
                "Budget (per person): ${} - ${}",
                amount(range.min()),
                amount(range.max())
            ));
        }
        Card {
            title: self.name.clone(),
            image_url: self.image_url.clone(),
            details,
        }
    }
}

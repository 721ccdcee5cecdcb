use crate::listing::Listing;

use super::Predicate;

pub struct TitleContainsPredicate {
    needle: String,
}

impl TitleContainsPredicate {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Predicate for TitleContainsPredicate {
    fn name(&self) -> &'static str {
        "title_contains"
    }

    fn matches(&self, item: &dyn Listing) -> bool {
        item.title().to_lowercase().contains(&self.needle)
    }
}

pub struct LocationContainsPredicate {
    needle: String,
}

impl LocationContainsPredicate {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Predicate for LocationContainsPredicate {
    fn name(&self) -> &'static str {
        "location_contains"
    }

    fn matches(&self, item: &dyn Listing) -> bool {
        item.location()
            .map(|loc| loc.to_lowercase().contains(&self.needle))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripr_catalog::builtin_trips;

    #[test]
    fn title_match_ignores_case() {
        let trips = builtin_trips();
        let pred = TitleContainsPredicate::new("BEACH");
        assert!(pred.matches(&trips[0]));
        assert!(!pred.matches(&trips[1]));
    }

    #[test]
    fn location_match_is_substring() {
        let trips = builtin_trips();
        let pred = LocationContainsPredicate::new("allep");
        let hits: Vec<&str> = trips
            .iter()
            .filter(|t| pred.matches(*t))
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(hits, vec!["Kerala Backwaters"]);
    }
}

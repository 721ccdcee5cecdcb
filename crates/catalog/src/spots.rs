use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::models::{Destination, PreferenceTag};

/// Preference tag → destination list. The single table every suggestion
/// lookup goes through.
#[derive(Debug, Clone, Default)]
pub struct SpotCatalog {
    entries: BTreeMap<PreferenceTag, Vec<Destination>>,
}

impl SpotCatalog {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PreferenceTag, Vec<Destination>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The catalog shipped with the planner.
    pub fn builtin() -> &'static SpotCatalog {
        static CATALOG: OnceLock<SpotCatalog> = OnceLock::new();
        CATALOG.get_or_init(build_builtin)
    }

    /// Destinations for `tag`; empty when the tag is unknown.
    pub fn get(&self, tag: &PreferenceTag) -> &[Destination] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, tag: &PreferenceTag) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &PreferenceTag> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn placeholder(bg: &str, fg: &str, text: &str) -> String {
    format!("https://placehold.co/250x150/{bg}/{fg}?text={text}")
}

fn spot(name: &str, description: &str, image: String, min: f64, max: f64) -> Destination {
    Destination::new(name, description, &image, Some([min, max]))
}

fn build_builtin() -> SpotCatalog {
    let table = vec![
        (
            "adventure",
            vec![
                spot(
                    "Rishikesh, India",
                    "River rafting, trekking, and yoga.",
                    placeholder("ff9800", "fff", "Rishikesh"),
                    100.0,
                    300.0,
                ),
                spot(
                    "Interlaken, Switzerland",
                    "Paragliding and hiking in the Alps.",
                    placeholder("4caf50", "fff", "Interlaken"),
                    500.0,
                    1000.0,
                ),
                spot(
                    "Queenstown, New Zealand",
                    "Bungee jumping and jet boating.",
                    placeholder("2196f3", "fff", "Queenstown"),
                    700.0,
                    1500.0,
                ),
            ],
        ),
        (
            "cultural_heritage",
            vec![
                spot(
                    "Jaipur, India",
                    "Explore historic forts and palaces.",
                    placeholder("9c27b0", "fff", "Jaipur"),
                    150.0,
                    400.0,
                ),
                spot(
                    "Rome, Italy",
                    "Ancient ruins like the Colosseum and Roman Forum.",
                    placeholder("e91e63", "fff", "Rome"),
                    400.0,
                    800.0,
                ),
                spot(
                    "Kyoto, Japan",
                    "Temples, shrines, and geisha districts.",
                    placeholder("673ab7", "fff", "Kyoto"),
                    600.0,
                    1200.0,
                ),
            ],
        ),
        (
            "beaches",
            vec![
                spot(
                    "Goa, India",
                    "Vibrant nightlife and beautiful beaches.",
                    placeholder("ffeb3b", "000", "Goa"),
                    100.0,
                    350.0,
                ),
                spot(
                    "Phuket, Thailand",
                    "Stunning islands and water sports.",
                    placeholder("00bcd4", "fff", "Phuket"),
                    300.0,
                    700.0,
                ),
                spot(
                    "Maldives",
                    "Luxury resorts and clear blue waters.",
                    placeholder("03a9f4", "fff", "Maldives"),
                    1000.0,
                    5000.0,
                ),
            ],
        ),
        (
            "mountains",
            vec![
                spot(
                    "Manali, India",
                    "Snow-capped peaks and trekking routes.",
                    placeholder("795548", "fff", "Manali"),
                    120.0,
                    300.0,
                ),
                spot(
                    "Banff National Park, Canada",
                    "Turquoise lakes and mountain trails.",
                    placeholder("607d8b", "fff", "Banff"),
                    600.0,
                    1100.0,
                ),
                spot(
                    "Swiss Alps, Switzerland",
                    "Scenic views and skiing.",
                    placeholder("9e9e9e", "fff", "Swiss+Alps"),
                    700.0,
                    1500.0,
                ),
            ],
        ),
        (
            "festival",
            vec![
                spot(
                    "Rio de Janeiro, Brazil",
                    "Known for the famous Carnival festival.",
                    placeholder("ff5722", "fff", "Rio+Carnival"),
                    400.0,
                    900.0,
                ),
                spot(
                    "Munich, Germany",
                    "Home of the world-renowned Oktoberfest.",
                    placeholder("f44336", "fff", "Oktoberfest"),
                    500.0,
                    1000.0,
                ),
                spot(
                    "Nagaland, India",
                    "Experience the colorful Hornbill Festival.",
                    placeholder("ffc107", "000", "Hornbill"),
                    200.0,
                    500.0,
                ),
            ],
        ),
        (
            "wildlife",
            vec![
                spot(
                    "Ranthambore, India",
                    "Tiger safari in a historic park.",
                    placeholder("8bc34a", "fff", "Ranthambore"),
                    250.0,
                    600.0,
                ),
                spot(
                    "Maasai Mara, Kenya",
                    "Witness the Great Migration.",
                    placeholder("009688", "fff", "Maasai+Mara"),
                    1500.0,
                    3000.0,
                ),
            ],
        ),
        (
            "food",
            vec![
                spot(
                    "Kolkata, India",
                    "A paradise for street food lovers.",
                    placeholder("ff9800", "fff", "Kolkata+Food"),
                    100.0,
                    200.0,
                ),
                spot(
                    "Tokyo, Japan",
                    "Michelin-star restaurants and unique culinary experiences.",
                    placeholder("9e9e9e", "fff", "Tokyo+Food"),
                    800.0,
                    1800.0,
                ),
            ],
        ),
        (
            "city_life",
            vec![
                spot(
                    "Dubai, UAE",
                    "Modern architecture, luxury shopping, and vibrant nightlife.",
                    placeholder("795548", "fff", "Dubai"),
                    500.0,
                    1000.0,
                ),
                spot(
                    "New York, USA",
                    "Iconic landmarks and diverse cultural scene.",
                    placeholder("607d8b", "fff", "New+York"),
                    700.0,
                    1500.0,
                ),
            ],
        ),
    ];

    SpotCatalog::new(
        table
            .into_iter()
            .map(|(tag, spots)| (PreferenceTag::new(tag), spots)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_every_tag() {
        let catalog = SpotCatalog::builtin();
        let tags: Vec<&str> = catalog.tags().map(PreferenceTag::as_str).collect();
        for expected in [
            "adventure",
            "beaches",
            "city_life",
            "cultural_heritage",
            "festival",
            "food",
            "mountains",
            "wildlife",
        ] {
            assert!(tags.contains(&expected), "missing tag {expected}");
        }
        assert_eq!(catalog.len(), 21);
    }

    #[test]
    fn adventure_keeps_declared_order() {
        let adventure = SpotCatalog::builtin().get(&PreferenceTag::new("adventure"));
        let names: Vec<&str> = adventure.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Rishikesh, India",
                "Interlaken, Switzerland",
                "Queenstown, New Zealand"
            ]
        );
    }

    #[test]
    fn unknown_tag_is_empty() {
        let catalog = SpotCatalog::builtin();
        let tag = PreferenceTag::new("space_travel");
        assert!(!catalog.contains(&tag));
        assert!(catalog.get(&tag).is_empty());
    }
}

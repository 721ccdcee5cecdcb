use crate::models::{Season, Trip};

fn trip(title: &str, location: &str, price: f64, rating: f64, season: Season, image: u8) -> Trip {
    Trip {
        title: title.to_owned(),
        location: location.to_owned(),
        price,
        rating,
        season,
        image_url: format!("https://picsum.photos/400/200?{image}"),
    }
}

/// The trip browser dataset, prices in rupees.
pub fn builtin_trips() -> Vec<Trip> {
    vec![
        trip("Goa Beach Stay", "Goa", 3500.0, 4.5, Season::Summer, 1),
        trip("Shimla Hills", "Shimla", 2500.0, 4.3, Season::Winter, 2),
        trip("Kerala Backwaters", "Alleppey", 4500.0, 4.8, Season::Monsoon, 3),
        trip("Desert Safari", "Jaisalmer", 3000.0, 4.0, Season::Winter, 4),
        trip("Darjeeling Tea Trip", "Darjeeling", 2800.0, 4.6, Season::Spring, 5),
    ]
}

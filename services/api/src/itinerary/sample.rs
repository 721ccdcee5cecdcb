use tripr_common::types::{Activity, DayPlan};

fn activity(time: &str, name: &str, duration: &str, cost: &str, crowd_level: &str) -> Activity {
    Activity {
        time: time.to_owned(),
        activity: name.to_owned(),
        duration: duration.to_owned(),
        cost: cost.to_owned(),
        crowd_level: crowd_level.to_owned(),
    }
}

pub fn sample_itinerary() -> Vec<DayPlan> {
    vec![
        DayPlan {
            day: 1,
            activities: vec![
                activity("09:00", "Visit Museum", "2h", "$20", "Low"),
                activity("12:00", "Lunch at Local Cafe", "1h", "$15", "Medium"),
            ],
        },
        DayPlan {
            day: 2,
            activities: vec![
                activity("10:00", "City Tour", "3h", "$50", "High"),
                activity("14:00", "Shopping", "2h", "$100", "Medium"),
            ],
        },
        DayPlan {
            day: 3,
            activities: vec![
                activity("09:00", "Hiking Adventure", "4h", "$0", "Low"),
                activity("14:00", "Dinner at Restaurant", "2h", "$40", "High"),
            ],
        },
    ]
}

use crate::card::{Card, ToCard};

pub const SPOTS_EMPTY_MESSAGE: &str =
    "No spots found for your criteria. Please adjust your budget or preference.";
pub const TRIPS_EMPTY_MESSAGE: &str = "No trips match your filters.";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Something results can be drawn on.
pub trait Surface {
    fn clear(&mut self);
    fn set_count(&mut self, label: &str);
    fn show_message(&mut self, message: &str);
    fn push_card(&mut self, card: Card);
}

pub fn count_label(count: usize) -> String {
    match count {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    }
}

/// Redraw `surface` with `results`, in order. An empty slice shows
/// `empty_message` instead of cards.
pub fn render<S, T>(surface: &mut S, results: &[T], empty_message: &str)
where
    S: Surface + ?Sized,
    T: ToCard,
{
    surface.clear();
    surface.set_count(&count_label(results.len()));

    if results.is_empty() {
        surface.show_message(empty_message);
        return;
    }

    for item in results {
        surface.push_card(item.to_card());
    }
}

pub fn render_loading<S: Surface + ?Sized>(surface: &mut S) {
    surface.clear();
    surface.show_message(LOADING_MESSAGE);
}

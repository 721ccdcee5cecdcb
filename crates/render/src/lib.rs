pub mod card;
pub mod html;
pub mod surface;
pub mod text;
pub mod theme;

pub use card::{Card, ToCard};
pub use html::HtmlSurface;
pub use surface::{
    count_label, render, render_loading, Surface, LOADING_MESSAGE, SPOTS_EMPTY_MESSAGE,
    TRIPS_EMPTY_MESSAGE,
};
pub use text::TextSurface;
pub use theme::Theme;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::card::Card;
use crate::surface::Surface;
use crate::theme::Theme;

/// Collects a render pass and emits it as an HTML page. All text goes
/// through maud, so catalog strings are escaped.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    heading: String,
    theme: Theme,
    count: String,
    message: Option<String>,
    cards: Vec<Card>,
}

impl HtmlSurface {
    pub fn new(heading: &str, theme: Theme) -> Self {
        Self {
            heading: heading.to_owned(),
            theme,
            count: String::new(),
            message: None,
            cards: Vec::new(),
        }
    }

    /// The results block alone: count, then the placeholder or the cards.
    pub fn fragment(&self) -> Markup {
        html! {
            section.results {
                p.count #"countText" { (self.count) }
                @if let Some(message) = &self.message {
                    p.empty #"empty" { (message) }
                }
                div.cards #"results" {
                    @for card in &self.cards {
                        (render_card(card))
                    }
                }
            }
        }
    }

    pub fn page(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.heading) }
                    style { (PreEscaped(CSS)) }
                }
                body class=[self.theme.body_class()] {
                    main.container {
                        h1 { (self.heading) }
                        (self.fragment())
                    }
                }
            }
        }
    }
}

impl Surface for HtmlSurface {
    fn clear(&mut self) {
        self.count.clear();
        self.message = None;
        self.cards.clear();
    }

    fn set_count(&mut self, label: &str) {
        self.count = label.to_owned();
    }

    fn show_message(&mut self, message: &str) {
        self.message = Some(message.to_owned());
    }

    fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

fn render_card(card: &Card) -> Markup {
    html! {
        div.card {
            img src=(card.image_url) alt=(card.title);
            div.card-body {
                h3 { (card.title) }
                @for line in &card.details {
                    p { (line) }
                }
            }
        }
    }
}

const CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; background: #f4f6fb; color: #222; }
body.dark-mode { background: #121212; color: #eee; }
.container { max-width: 960px; margin: 0 auto; padding: 32px 16px; }
h1 { margin-bottom: 16px; }
.count { color: #666; margin-bottom: 12px; }
.empty { text-align: center; color: #888; padding: 24px 0; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 16px; }
.card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 6px rgba(0,0,0,0.1); }
body.dark-mode .card { background: #1e1e1e; }
.card img { width: 100%; display: block; }
.card-body { padding: 12px; }
.card-body p { margin-top: 6px; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{render, SPOTS_EMPTY_MESSAGE, TRIPS_EMPTY_MESSAGE};
    use tripr_catalog::{builtin_trips, Destination};

    #[test]
    fn empty_page_has_placeholder_and_zero_count() {
        let mut surface = HtmlSurface::new("Trips", Theme::default());
        let none: Vec<Destination> = Vec::new();
        render(&mut surface, &none, SPOTS_EMPTY_MESSAGE);
        let page = surface.page().into_string();
        assert!(page.contains("0 results"));
        assert!(page.contains(SPOTS_EMPTY_MESSAGE));
        assert!(!page.contains("class=\"card\""));
    }

    #[test]
    fn cards_render_in_order() {
        let mut surface = HtmlSurface::new("Trips", Theme::default());
        render(&mut surface, &builtin_trips(), TRIPS_EMPTY_MESSAGE);
        let page = surface.fragment().into_string();
        let goa = page.find("Goa Beach Stay").unwrap();
        let shimla = page.find("Shimla Hills").unwrap();
        assert!(goa < shimla);
        assert!(page.contains("5 results"));
    }

    #[test]
    fn catalog_text_is_escaped() {
        let mut surface = HtmlSurface::new("Spots", Theme::default());
        let spot = Destination::new("<script>alert(1)</script>", "x & y", "img", None);
        render(&mut surface, &[spot], SPOTS_EMPTY_MESSAGE);
        let page = surface.fragment().into_string();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("x &amp; y"));
    }

    #[test]
    fn dark_theme_sets_body_class() {
        let light = HtmlSurface::new("Trips", Theme::default()).page().into_string();
        assert!(!light.contains("dark-mode\""));

        let dark = HtmlSurface::new("Trips", Theme::dark()).page().into_string();
        assert!(dark.contains("<body class=\"dark-mode\">"));
    }
}

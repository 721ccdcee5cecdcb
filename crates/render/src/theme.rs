use serde::{Deserialize, Serialize};

/// Light/dark display toggle. Purely presentational, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub const DARK_CLASS: &'static str = "dark-mode";

    pub fn dark() -> Self {
        Self { dark: true }
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.dark.then_some(Self::DARK_CLASS)
    }
}

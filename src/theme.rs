//! Display theme preference
//!
//! Two-valued setting persisted under the `"theme"` key as the bare string
//! `light` or `dark`. An absent or unrecognized stored value falls back to
//! light.

use crate::storage::KeyValueStore;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme '{}'. Valid options are: light, dark", s)),
        }
    }
}

/// Owns the current theme and its persistence.
pub struct ThemeController {
    theme: Theme,
    store: Rc<dyn KeyValueStore>,
}

impl ThemeController {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        let theme = store
            .load(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self { theme, store }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Flip light/dark, persist the new value and return it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.flipped();
        self.store.save(THEME_KEY, &self.theme.to_string());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let controller = ThemeController::new(Rc::new(MemoryStore::new()));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let kv = Rc::new(MemoryStore::new());
        let mut controller = ThemeController::new(Rc::clone(&kv) as Rc<dyn KeyValueStore>);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(kv.load(THEME_KEY).as_deref(), Some("dark"));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(kv.load(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_loads_saved_theme() {
        let kv = Rc::new(MemoryStore::new());
        kv.save(THEME_KEY, "dark");

        let controller = ThemeController::new(Rc::clone(&kv) as Rc<dyn KeyValueStore>);
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn test_unrecognized_stored_theme_falls_back_to_light() {
        let kv = Rc::new(MemoryStore::new());
        kv.save(THEME_KEY, "solarized");

        let controller = ThemeController::new(Rc::clone(&kv) as Rc<dyn KeyValueStore>);
        assert_eq!(controller.current(), Theme::Light);
    }
}

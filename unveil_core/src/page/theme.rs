// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Light/dark theme preference.
//!
//! The preference is the only persisted state on the page: one string under
//! [`THEME_KEY`] in the host's key-value store, read once at load and written
//! once per toggle.

use alloc::string::String;

use crate::reveal::{Easing, Transition};
use crate::time::Duration;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// Body colour transition installed while the theme flips.
pub const THEME_FADE: Transition = Transition {
    duration: Duration::from_millis(300),
    easing: Easing::Ease,
};

/// Renders the body `transition` value used during a theme flip.
#[must_use]
pub fn theme_fade_css() -> String {
    let mut css = THEME_FADE.property_css("background");
    css.push_str(", ");
    css.push_str(&THEME_FADE.property_css("color"));
    css
}

/// Page colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Default scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Interprets a stored value; anything but `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The value stored and written to `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button label: the scheme you would switch to.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}\u{fe0f}",
            Self::Light => "\u{1f319}",
        }
    }
}

/// Key-value persistence for the theme preference.
///
/// Implementations swallow storage failures: a missing or read-only store
/// behaves like an empty one.
pub trait ThemeStore {
    /// Reads the stored preference, if any.
    fn load(&self) -> Option<String>;

    /// Writes the preference.
    fn save(&mut self, value: &str);
}

/// Tracks the active theme and persists toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    current: Theme,
}

impl ThemeController {
    /// Restores the stored preference (light when absent).
    #[must_use]
    pub fn load<S: ThemeStore + ?Sized>(store: &S) -> Self {
        Self {
            current: Theme::from_stored(store.load().as_deref()),
        }
    }

    /// The active theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme, persists it, and returns the new theme.
    pub fn toggle<S: ThemeStore + ?Sized>(&mut self, store: &mut S) -> Theme {
        self.current = self.current.toggled();
        store.save(self.current.as_str());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: Option<String>,
        writes: u32,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.clone()
        }

        fn save(&mut self, value: &str) {
            self.value = Some(value.into());
            self.writes += 1;
        }
    }

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(ThemeController::load(&store).current(), Theme::Light);
        assert_eq!(Theme::from_stored(Some("purple")), Theme::Light);
    }

    #[test]
    fn toggle_persists_once_per_flip() {
        let mut store = MemoryStore {
            value: Some("dark".into()),
            writes: 0,
        };
        let mut theme = ThemeController::load(&store);
        assert_eq!(theme.current(), Theme::Dark);

        assert_eq!(theme.toggle(&mut store), Theme::Light);
        assert_eq!(store.value.as_deref(), Some("light"));
        assert_eq!(theme.toggle(&mut store), Theme::Dark);
        assert_eq!(store.writes, 2);
    }

    #[test]
    fn icon_points_at_the_other_scheme() {
        assert_eq!(Theme::Dark.icon(), "\u{2600}\u{fe0f}");
        assert_eq!(Theme::Light.icon(), "\u{1f319}");
    }

    #[test]
    fn fade_covers_background_and_color() {
        assert_eq!(theme_fade_css(), "background 0.3s ease, color 0.3s ease");
    }
}

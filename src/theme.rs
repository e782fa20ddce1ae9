use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    BlueDark,
    PurpleDark,
    GreenDark,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Light,
        ThemeName::Dark,
        ThemeName::BlueDark,
        ThemeName::PurpleDark,
        ThemeName::GreenDark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
            ThemeName::BlueDark => "blue-dark",
            ThemeName::PurpleDark => "purple-dark",
            ThemeName::GreenDark => "green-dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
            ThemeName::BlueDark => "Blue Dark",
            ThemeName::PurpleDark => "Purple Dark",
            ThemeName::GreenDark => "Green Dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        !matches!(self, ThemeName::Light)
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SiteError::InvalidThemeSelection(s.to_string()))
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeState {
    Uninitialized,
    Initialized(ThemeName),
}

/// Stays `Uninitialized` until [`ThemeController::init`], which the page only
/// calls after hydration.
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    default: ThemeName,
    state: ThemeState,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S, default: ThemeName) -> Self {
        Self {
            store,
            default,
            state: ThemeState::Uninitialized,
        }
    }

    // idempotent; garbage in the store counts as nothing stored
    pub fn init(&mut self) -> ThemeName {
        if let ThemeState::Initialized(theme) = self.state {
            return theme;
        }
        let theme = match self.store.load() {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::debug!("ignoring persisted theme: {e}");
                self.default
            }),
            None => self.default,
        };
        self.state = ThemeState::Initialized(theme);
        theme
    }

    pub fn set_theme(&mut self, name: &str) -> Result<ThemeName, SiteError> {
        let theme = name.parse::<ThemeName>()?;
        self.store.save(theme.as_str());
        self.state = ThemeState::Initialized(theme);
        Ok(theme)
    }

    pub fn current(&self) -> Option<ThemeName> {
        match self.state {
            ThemeState::Uninitialized => None,
            ThemeState::Initialized(theme) => Some(theme),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.current().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Arc<Mutex<Option<String>>>,
        writes: Arc<Mutex<usize>>,
    }

    impl MemoryStore {
        fn with_value(value: &str) -> Self {
            let store = Self::default();
            *store.value.lock().unwrap() = Some(value.to_string());
            store
        }

        fn value(&self) -> Option<String> {
            self.value.lock().unwrap().clone()
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value()
        }

        fn save(&self, value: &str) {
            *self.value.lock().unwrap() = Some(value.to_string());
            *self.writes.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_theme_names_round_trip_strings() {
        for theme in ThemeName::ALL {
            assert_eq!(theme.as_str().parse::<ThemeName>(), Ok(theme));
            assert_eq!(theme.to_string(), theme.as_str());
        }
        assert_eq!(ThemeName::BlueDark.label(), "Blue Dark");
        assert!(!ThemeName::Light.is_dark());
        assert!(ThemeName::GreenDark.is_dark());
    }

    #[test]
    fn test_uninitialized_until_init() {
        let mut controller = ThemeController::new(MemoryStore::default(), ThemeName::Light);
        assert_eq!(controller.state(), ThemeState::Uninitialized);
        assert_eq!(controller.current(), None);

        assert_eq!(controller.init(), ThemeName::Light);
        assert_eq!(controller.state(), ThemeState::Initialized(ThemeName::Light));
    }

    #[test]
    fn test_init_restores_persisted_theme() {
        let mut controller =
            ThemeController::new(MemoryStore::with_value("green-dark"), ThemeName::Light);
        assert_eq!(controller.init(), ThemeName::GreenDark);
        assert_eq!(controller.current(), Some(ThemeName::GreenDark));
    }

    #[test]
    fn test_init_ignores_corrupted_value() {
        for garbage in ["", "Green-Dark", "sepia", "{\"theme\":\"dark\"}"] {
            let mut controller =
                ThemeController::new(MemoryStore::with_value(garbage), ThemeName::Light);
            assert_eq!(controller.init(), ThemeName::Light, "stored {garbage:?}");
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        let store = MemoryStore::with_value("dark");
        let mut controller = ThemeController::new(store.clone(), ThemeName::Light);
        controller.init();
        // a later change in storage does not re-run initialization
        store.save("purple-dark");
        assert_eq!(controller.init(), ThemeName::Dark);
    }

    #[test]
    fn test_set_theme_persists() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::new(store.clone(), ThemeName::Light);
        controller.init();

        assert_eq!(controller.set_theme("blue-dark"), Ok(ThemeName::BlueDark));
        assert_eq!(controller.current(), Some(ThemeName::BlueDark));
        assert_eq!(store.value().as_deref(), Some("blue-dark"));

        controller.set_theme("light").unwrap();
        assert_eq!(store.value().as_deref(), Some("light"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_invalid_theme_leaves_state_unchanged() {
        let store = MemoryStore::with_value("dark");
        let mut controller = ThemeController::new(store.clone(), ThemeName::Light);
        controller.init();

        for bad in ["", "DARK", "solarized", "light ", "blue_dark"] {
            let res = controller.set_theme(bad);
            assert_eq!(res, Err(SiteError::InvalidThemeSelection(bad.to_string())));
            assert_eq!(controller.current(), Some(ThemeName::Dark));
        }
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_set_theme_before_init_initializes() {
        let mut controller = ThemeController::new(MemoryStore::default(), ThemeName::Light);
        controller.set_theme("purple-dark").unwrap();
        assert_eq!(controller.init(), ThemeName::PurpleDark);
    }
}

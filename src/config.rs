use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::theme::ThemeName;

static EMBEDDED_CONFIG: &str = include_str!("../page.json");

/// Tunables shared by every section of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Fraction of a section that must be on screen before it is revealed.
    pub reveal_threshold: f64,
    /// Height of the fixed navbar, subtracted from scroll targets.
    pub navbar_offset: f64,
    /// Vertical scroll past which the navbar gets an opaque backing.
    pub scroll_shadow_after: f64,
    /// Viewport width (px) below which the collapsible menu is used.
    pub mobile_breakpoint: u32,
    pub theme_storage_key: String,
    pub default_theme: ThemeName,
    pub submit_delay_ms: u64,
    pub toast_duration_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            navbar_offset: 64.0,
            scroll_shadow_after: 10.0,
            mobile_breakpoint: 768,
            theme_storage_key: "theme".to_string(),
            default_theme: ThemeName::Light,
            submit_delay_ms: 1500,
            toast_duration_ms: 5000,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The config compiled into the binary, or the defaults if it is broken.
    pub fn load() -> Self {
        Self::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log::error!("{e}; falling back to default page config");
            Self::default()
        })
    }

    /// Media query matching the narrow (collapsible menu) layout.
    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint.saturating_sub(1))
    }

    fn validate(&self) -> Result<(), SiteError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(SiteError::Config(format!(
                "reveal_threshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.navbar_offset < 0.0 || self.scroll_shadow_after < 0.0 {
            return Err(SiteError::Config(
                "navbar_offset and scroll_shadow_after must not be negative".to_string(),
            ));
        }
        if self.theme_storage_key.is_empty() {
            return Err(SiteError::Config(
                "theme_storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = PageConfig::from_json(EMBEDDED_CONFIG).expect("page.json should be valid");
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.default_theme, ThemeName::Light);
        assert_eq!(config.reveal_threshold, 0.1);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = PageConfig::from_json(r#"{ "navbar_offset": 80 }"#).unwrap();
        assert_eq!(config.navbar_offset, 80.0);
        assert_eq!(config.mobile_breakpoint, 768);
        assert_eq!(config.submit_delay_ms, 1500);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            PageConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#),
            Err(SiteError::Config(_))
        ));
        assert!(matches!(
            PageConfig::from_json(r#"{ "default_theme": "sepia" }"#),
            Err(SiteError::Config(_))
        ));
        assert!(PageConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_narrow_media_query() {
        let config = PageConfig::default();
        assert_eq!(config.narrow_media_query(), "(max-width: 767px)");
    }
}

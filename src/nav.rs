use crate::config::PageConfig;
use crate::error::SiteError;
use crate::sections::{find_section, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    Narrow,
    #[default]
    Wide,
}

impl Layout {
    pub fn from_narrow(is_narrow: bool) -> Self {
        if is_narrow {
            Layout::Narrow
        } else {
            Layout::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenuState {
    pub is_open: bool,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    registry: &'static [Section],
    layout: Layout,
    menu: NavMenuState,
    active: Option<&'static str>,
    is_scrolled: bool,
    navbar_offset: f64,
    scroll_shadow_after: f64,
}

impl Navigator {
    pub fn new(registry: &'static [Section], config: &PageConfig) -> Self {
        Self {
            registry,
            layout: Layout::default(),
            menu: NavMenuState::default(),
            active: None,
            is_scrolled: false,
            navbar_offset: config.navbar_offset,
            scroll_shadow_after: config.scroll_shadow_after,
        }
    }

    pub fn registry(&self) -> &'static [Section] {
        self.registry
    }

    pub fn resolve(&self, target: &str) -> Result<&'static Section, SiteError> {
        find_section(self.registry, target)
            .ok_or_else(|| SiteError::UnknownSectionTarget(target.to_string()))
    }

    /// Closes the menu and marks `target` active. Unknown targets change
    /// nothing.
    pub fn activate(&mut self, target: &str) -> Result<&'static Section, SiteError> {
        let section = self.resolve(target)?;
        self.menu.is_open = false;
        self.active = Some(section.id);
        Ok(section)
    }

    // no-op in the wide layout
    pub fn toggle_menu(&mut self) -> bool {
        if self.layout == Layout::Narrow {
            self.menu.is_open = !self.menu.is_open;
        }
        self.menu.is_open
    }

    pub fn set_layout(&mut self, layout: Layout) -> bool {
        if self.layout == layout {
            return false;
        }
        self.layout = layout;
        if layout == Layout::Wide {
            self.menu.is_open = false;
        }
        true
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let is_scrolled = scroll_y > self.scroll_shadow_after;
        let changed = is_scrolled != self.is_scrolled;
        self.is_scrolled = is_scrolled;
        changed
    }

    /// `element_top` is viewport-relative; the result is an absolute,
    /// non-negative scroll position just under the fixed navbar.
    pub fn scroll_top(&self, element_top: f64, scroll_y: f64) -> f64 {
        (scroll_y + element_top - self.navbar_offset).max(0.0)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn menu(&self) -> NavMenuState {
        self.menu
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::sections;

    fn navigator() -> Navigator {
        Navigator::new(sections(), &PageConfig::default())
    }

    #[test]
    fn test_activate_known_section() {
        let mut nav = navigator();
        let section = nav.activate("portfolio").expect("portfolio is registered");
        assert_eq!(section.id, "portfolio");
        assert_eq!(nav.active(), Some("portfolio"));

        nav.activate("#contact").unwrap();
        assert_eq!(nav.active(), Some("contact"));
    }

    #[test]
    fn test_activate_unknown_is_noop() {
        let mut nav = navigator();
        nav.set_layout(Layout::Narrow);
        nav.toggle_menu();
        nav.activate("about").unwrap();
        nav.toggle_menu();
        let before = nav.clone();

        let res = nav.activate("nonexistent");
        assert_eq!(
            res,
            Err(SiteError::UnknownSectionTarget("nonexistent".to_string()))
        );
        assert_eq!(nav.active(), before.active());
        assert_eq!(nav.menu(), before.menu());
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_resolve_leaves_state_alone() {
        let mut nav = navigator();
        nav.set_layout(Layout::Narrow);
        nav.toggle_menu();
        nav.activate("skills").unwrap();
        nav.toggle_menu();

        assert_eq!(nav.resolve("#about").map(|s| s.id), Ok("about"));
        assert_eq!(
            nav.resolve("nonexistent"),
            Err(SiteError::UnknownSectionTarget("nonexistent".to_string()))
        );
        assert_eq!(nav.active(), Some("skills"));
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_toggle_menu_in_narrow_layout() {
        let mut nav = navigator();
        nav.set_layout(Layout::Narrow);
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
        assert!(nav.toggle_menu());
        assert!(nav.is_menu_open());
    }

    #[test]
    fn test_toggle_menu_ignored_in_wide_layout() {
        let mut nav = navigator();
        assert_eq!(nav.layout(), Layout::Wide);
        assert!(!nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn test_activate_closes_menu() {
        let mut nav = navigator();
        nav.set_layout(Layout::Narrow);
        for id in ["hero", "skills", "contact"] {
            nav.toggle_menu();
            assert!(nav.is_menu_open());
            nav.activate(id).unwrap();
            assert!(!nav.is_menu_open());
        }
        // already closed stays closed
        nav.activate("about").unwrap();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_going_wide_closes_menu() {
        let mut nav = navigator();
        assert!(nav.set_layout(Layout::Narrow));
        nav.toggle_menu();
        assert!(!nav.set_layout(Layout::Narrow));
        assert!(nav.is_menu_open());
        assert!(nav.set_layout(Layout::Wide));
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_shadow() {
        let mut nav = navigator();
        assert!(!nav.is_scrolled());
        assert!(!nav.on_scroll(10.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(10.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_scroll_top_accounts_for_navbar() {
        let nav = navigator();
        assert_eq!(nav.scroll_top(500.0, 100.0), 536.0);
        assert_eq!(nav.scroll_top(-200.0, 1000.0), 736.0);
        // never scrolls above the page
        assert_eq!(nav.scroll_top(10.0, 0.0), 0.0);
    }
}

/// One anchorable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub display_name: &'static str,
    pub order: u8,
}

pub static SECTIONS: [Section; 8] = [
    Section {
        id: "hero",
        display_name: "Home",
        order: 0,
    },
    Section {
        id: "about",
        display_name: "About",
        order: 1,
    },
    Section {
        id: "portfolio",
        display_name: "Portfolio",
        order: 2,
    },
    Section {
        id: "certifications",
        display_name: "Certifications",
        order: 3,
    },
    Section {
        id: "skills",
        display_name: "Skills",
        order: 4,
    },
    Section {
        id: "experience",
        display_name: "Experience",
        order: 5,
    },
    Section {
        id: "testimonials",
        display_name: "Testimonials",
        order: 6,
    },
    Section {
        id: "contact",
        display_name: "Contact",
        order: 7,
    },
];

pub fn sections() -> &'static [Section] {
    &SECTIONS
}

/// Looks a section up by id. Accepts link-style targets like `#about`.
pub fn find_section(registry: &'static [Section], target: &str) -> Option<&'static Section> {
    let id = target.strip_prefix('#').unwrap_or(target);
    registry.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids = SECTIONS.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn test_order_strictly_increasing() {
        assert!(SECTIONS.windows(2).all(|w| w[0].order < w[1].order));
        assert_eq!(SECTIONS[0].id, "hero");
        assert_eq!(SECTIONS[SECTIONS.len() - 1].id, "contact");
    }

    #[test]
    fn test_find_section() {
        assert_eq!(find_section(sections(), "skills").map(|s| s.order), Some(4));
        assert_eq!(
            find_section(sections(), "#hero").map(|s| s.display_name),
            Some("Home")
        );
        assert!(find_section(sections(), "nonexistent").is_none());
        assert!(find_section(sections(), "").is_none());
        assert!(find_section(sections(), "About").is_none());
    }
}

//! Hand-authored page content and the small rules the sections apply to it.

pub mod certifications;
pub mod experience;
pub mod portfolio;
pub mod skills;
pub mod testimonials;

/// Badges shown on a card before collapsing the rest into a "+N" badge.
pub const BADGE_PREVIEW: usize = 3;

/// Splits `items` into the badges shown on a card and the overflow count.
pub fn badge_preview<T>(items: &[T], limit: usize) -> (&[T], Option<usize>) {
    if items.len() > limit {
        (&items[..limit], Some(items.len() - limit))
    } else {
        (items, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_preview() {
        let techs = ["React", "Node.js", "MongoDB", "Stripe"];
        let (shown, more) = badge_preview(&techs, BADGE_PREVIEW);
        assert_eq!(shown, &["React", "Node.js", "MongoDB"]);
        assert_eq!(more, Some(1));

        let (shown, more) = badge_preview(&techs[..3], BADGE_PREVIEW);
        assert_eq!(shown.len(), 3);
        assert_eq!(more, None);

        let empty: [&str; 0] = [];
        assert_eq!(badge_preview(&empty, BADGE_PREVIEW), (&empty[..], None));
    }
}

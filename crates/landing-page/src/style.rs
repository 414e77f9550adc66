//! Tailwind class lists, one per element of the landing page.

/// Full-viewport gradient backdrop that centers its child.
pub const SCREEN: &str =
    "min-h-screen bg-gradient-to-r from-blue-500 to-indigo-600 flex items-center justify-center px-6";

pub const PANEL: &str = "max-w-2xl text-center text-white";

pub const HEADING: &str = "text-5xl font-extrabold mb-6";

pub const TAGLINE: &str = "text-xl mb-8";

/// Pill-shaped button look for the call-to-action anchor.
pub const CTA: &str = "inline-block bg-white text-blue-600 font-semibold px-6 py-3 rounded-full shadow-lg hover:bg-gray-100 transition";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn classes(list: &str) -> Vec<&str> {
        list.split_whitespace().collect()
    }

    #[test]
    fn test_no_duplicate_classes() {
        for list in [SCREEN, PANEL, HEADING, TAGLINE, CTA] {
            let all = classes(list);
            let unique: HashSet<_> = all.iter().collect();
            assert_eq!(all.len(), unique.len(), "duplicate class in {list:?}");
        }
    }

    #[test]
    fn test_screen_is_centered_gradient() {
        let screen = classes(SCREEN);
        for class in ["min-h-screen", "bg-gradient-to-r", "items-center", "justify-center"] {
            assert!(screen.contains(&class), "missing {class}");
        }
    }

    #[test]
    fn test_cta_has_hover_state() {
        assert!(classes(CTA).contains(&"hover:bg-gray-100"));
    }
}

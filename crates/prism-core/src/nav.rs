//! Anchor navigation.
//!
//! The page scrolls either to the very top or to a category's anchor. The
//! host webview does the actual scrolling; this module only decides where.

use crate::content::ColorTag;
use crate::icons::Glyph;

/// Height of the sticky header, subtracted from anchor positions.
pub const HEADER_OFFSET_PX: u32 = 90;

/// Where a navigation click should take the reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Top,
    Category(String),
}

impl NavTarget {
    /// Parse a semantic target: `"top"` or a category id.
    pub fn parse(target: &str) -> NavTarget {
        if target == "top" {
            NavTarget::Top
        } else {
            NavTarget::Category(target.to_string())
        }
    }

    /// Script that smoothly scrolls the viewport to this target.
    ///
    /// Unknown anchors leave the viewport where it is.
    pub fn scroll_script(&self) -> String {
        match self {
            NavTarget::Top => "window.scrollTo({ top: 0, behavior: 'smooth' });".to_string(),
            NavTarget::Category(id) => {
                // Serialising the id as a JSON string keeps quotes inside it inert.
                let id = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
                format!(
                    "(() => {{ const el = document.getElementById({id}); if (!el) return; \
                     const top = el.getBoundingClientRect().top + window.pageYOffset - {HEADER_OFFSET_PX}; \
                     window.scrollTo({{ top, behavior: 'smooth' }}); }})();"
                )
            }
        }
    }
}

/// Entry of the header navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
    pub color: ColorTag,
}

/// Header navigation, in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { id: "cognition", label: "认知", glyph: Glyph::Sparkles, color: ColorTag::Blue },
    NavItem { id: "life", label: "生活", glyph: Glyph::BookOpen, color: ColorTag::Pink },
    NavItem { id: "medical", label: "医疗", glyph: Glyph::Activity, color: ColorTag::Purple },
    NavItem { id: "community", label: "社群", glyph: Glyph::Users, color: ColorTag::Cyan },
];

/// Category the hero call-to-action scrolls to.
pub const START_TARGET: &str = "cognition";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_targets() {
        assert_eq!(NavTarget::parse("top"), NavTarget::Top);
        assert_eq!(NavTarget::parse("life"), NavTarget::Category("life".to_string()));
    }

    #[test]
    fn category_script_applies_header_offset() {
        let script = NavTarget::parse("medical").scroll_script();
        assert!(script.contains("getElementById(\"medical\")"));
        assert!(script.contains("- 90"));
        assert!(script.contains("behavior: 'smooth'"));
    }

    #[test]
    fn ids_are_escaped() {
        let script = NavTarget::Category("a\"b".to_string()).scroll_script();
        assert!(script.contains("getElementById(\"a\\\"b\")"));
    }

    #[test]
    fn nav_items_match_dataset_categories() {
        let content = crate::content::ContentModel::embedded().unwrap();
        for item in NAV_ITEMS {
            let category = content.category(item.id).unwrap();
            assert_eq!(category.color, item.color);
        }
    }
}

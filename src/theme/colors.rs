//! Palette constants.
//!
//! Soft pastel spectrum on a warm off-white page. The stylesheet defines
//! each of these as a CSS custom property.

#![allow(dead_code)]

// === PAGE ===
pub const PAGE: &str = "#f8fafc";
/// Window background shown before the webview paints
pub const PAGE_RGBA: (u8, u8, u8, u8) = (0xf8, 0xfa, 0xfc, 0xff);
pub const PAPER: &str = "#FDFBF7";
pub const INK: &str = "#1e293b";

// === SPECTRUM (one per category colour) ===
pub const BLUE: &str = "#60a5fa";
pub const PINK: &str = "#f472b6";
pub const PURPLE: &str = "#a78bfa";
pub const CYAN: &str = "#22d3ee";

// === ACCENTS ===
pub const SEAL_RED: &str = "#b91c1c";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn stylesheet_declares_palette() {
        for hex in [PAGE, PAPER, INK, BLUE, PINK, PURPLE, CYAN, SEAL_RED] {
            assert!(
                GLOBAL_STYLES.to_lowercase().contains(&hex.to_lowercase()),
                "missing {hex}"
            );
        }
    }

    #[test]
    fn page_rgba_matches_hex() {
        let (r, g, b, _) = PAGE_RGBA;
        assert_eq!(format!("#{r:02x}{g:02x}{b:02x}"), PAGE);
    }
}

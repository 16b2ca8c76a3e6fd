//! Icon and spinner primitives.
//!
//! Glyph outlines come from the core icon registry; this module only draws
//! them as inline SVG.

use dioxus::prelude::*;
use prism_core::Glyph;

/// Inline Lucide glyph
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { glyph: Glyph::resolve(Some(&category.icon), Glyph::CATEGORY_FALLBACK), size: 32 }
/// }
/// ```
#[component]
pub fn Icon(
    glyph: Glyph,
    #[props(default = 24)] size: u32,
    #[props(default = 2.0)] stroke_width: f32,
    /// Fill the outline with the current colour (used for the logo heart)
    #[props(default = false)]
    filled: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = class.unwrap_or_default();
    let fill = if filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "icon {class}",
            "data-icon": glyph.name(),
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in glyph.paths().iter() {
                path { d: "{d}" }
            }
        }
    }
}

/// Small rotating ring shown while work is in flight
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span { class: "spinner", role: "status", "aria-label": "Working" }
    }
}

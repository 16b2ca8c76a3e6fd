use dioxus::prelude::*;
use prism_core::Glyph;
use prism_ui::Icon;

/// Closing line and the informational-use disclaimer.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-mark",
                Icon { glyph: Glyph::Heart, size: 16, filled: true }
            }
            p { class: "footer-line", "Made with love, respect & courage" }
            p { class: "footer-disclaimer",
                "本站内容仅供科普与交流参考，不构成任何医疗或法律建议。涉及身体与用药的决定，请咨询专业医生。"
            }
        }
    }
}

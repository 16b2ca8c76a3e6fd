//! Hero banner with the opening call to action.

use dioxus::prelude::*;
use prism_core::Glyph;
use prism_ui::{Button, ButtonVariant, Icon};

#[component]
pub fn Hero(on_start: EventHandler<()>) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-badge",
                Icon { glyph: Glyph::Sparkles, size: 14 }
                span { "Prism Identity" }
            }

            h1 { class: "hero-title",
                "每一道光，"
                br {}
                span { class: "hero-gradient", "都值得被看见" }
            }

            p { class: "hero-lead",
                "性别不是非此即彼的两端，而是一道光谱。这里收集了关于认知、生活、医疗与社群的温柔指引，陪你慢慢认识自己。"
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "hero-cta".to_string(),
                onclick: on_start,
                span { "开始探索" }
                Icon { glyph: Glyph::ArrowRight, size: 18 }
            }
        }
    }
}

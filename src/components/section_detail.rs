//! Section Detail Component
//!
//! Glass modal showing every block of a section in order, each fading in
//! on its own delay.

use dioxus::prelude::*;
use prism_core::render::render_detail;
use prism_core::{Glyph, Section};
use prism_ui::{Button, ButtonVariant, CloseButton, IconButton, Modal, ModalTone};

use crate::components::BlockView;

#[derive(Props, Clone, PartialEq)]
pub struct SectionDetailProps {
    pub section: &'static Section,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn SectionDetail(props: SectionDetailProps) -> Element {
    let detail = render_detail(props.section);
    let on_close = props.on_close;

    rsx! {
        Modal { tone: ModalTone::Glass, on_close: on_close,
            div { class: "detail-header",
                IconButton {
                    glyph: Glyph::ArrowLeft,
                    onclick: on_close,
                    aria_label: "返回".to_string(),
                }
                h2 { class: "detail-title", "{detail.title}" }
                CloseButton { onclick: on_close }
            }

            div { class: "detail-body",
                for (idx, block) in detail.blocks.iter().enumerate() {
                    div {
                        key: "{detail.section_id}-{idx}",
                        class: "detail-block",
                        style: "animation-delay: {block.delay_ms}ms;",
                        BlockView { node: block.node.clone() }
                    }
                }

                div {
                    class: "detail-footer",
                    style: "animation-delay: {detail.footer_delay_ms}ms;",
                    div { class: "divider",
                        span { class: "divider-line" }
                        span { class: "divider-dot" }
                        span { class: "divider-line" }
                    }
                    Button { variant: ButtonVariant::Soft, onclick: on_close, "已阅 · 返回" }
                }
            }
        }
    }
}

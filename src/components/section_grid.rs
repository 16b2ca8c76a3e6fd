//! Section Grid Component
//!
//! Summary cards for a category. Clicking a card hands the section itself
//! to the parent, which opens the detail view.

use dioxus::prelude::*;
use prism_core::render::render_grid;
use prism_core::{ColorTag, Glyph, Section};
use prism_ui::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct SectionGridProps {
    pub sections: &'static [Section],
    pub color: ColorTag,
    pub on_select: EventHandler<&'static Section>,
}

#[component]
pub fn SectionGrid(props: SectionGridProps) -> Element {
    let cards = render_grid(props.sections, props.color);
    let on_select = props.on_select;

    rsx! {
        div { class: "section-grid",
            for card in cards {
                {
                    let section = card.section;
                    let palette = card.palette;
                    rsx! {
                        div {
                            key: "{section.id}",
                            class: "section-card glass-panel {palette.border} {palette.hover_shadow}",
                            onclick: move |_| {
                                tracing::debug!(section = %section.id, "Section selected");
                                on_select.call(section);
                            },

                            span { class: "card-blob {palette.blob}" }

                            div { class: "card-top",
                                div { class: "card-icon {palette.icon}",
                                    Icon { glyph: card.glyph, size: 22 }
                                }
                                div { class: "card-arrow {palette.icon}",
                                    Icon { glyph: Glyph::MoveRight, size: 18 }
                                }
                            }

                            h3 { class: "card-title", "{card.title()}" }
                            p { class: "card-desc", "{card.short_description()}" }
                        }
                    }
                }
            }
        }
    }
}

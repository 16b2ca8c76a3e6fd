//! One category: anchored header plus its card grid.

use dioxus::prelude::*;
use prism_core::render::render_category_header;
use prism_core::{Category, Section};
use prism_ui::Icon;

use crate::components::SectionGrid;

#[component]
pub fn CategoryBlock(
    category: &'static Category,
    on_select: EventHandler<&'static Section>,
) -> Element {
    let header = render_category_header(category);
    let color = header.color.name();

    rsx! {
        section { id: "{header.anchor}", class: "category",
            div { class: "category-header",
                div { class: "category-icon icon-{color}",
                    Icon { glyph: header.glyph, size: 28 }
                }
                div {
                    h2 { class: "category-title", "{header.title}" }
                    p { class: "category-desc", "{header.description}" }
                }
            }

            SectionGrid {
                sections: category.sections.as_slice(),
                color: header.color,
                on_select: on_select,
            }
        }
    }
}

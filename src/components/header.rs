//! Site Header Component
//!
//! Frosted bar with the logo on the left and category jump links on the
//! right. The heart badge doubles as the hidden entry to the quote scroll.

use dioxus::prelude::*;
use prism_core::nav::NAV_ITEMS;
use prism_core::{Glyph, NavTarget};
use prism_ui::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps {
    /// Jump to a category anchor or the top of the page
    pub on_nav: EventHandler<NavTarget>,
    /// Open the quote collection
    pub on_secret: EventHandler<()>,
}

/// Site header
///
/// - Logo text: scrolls to the top
/// - Heart badge: opens the collection without also scrolling
/// - Nav links: one per category, tinted with its colour
#[component]
pub fn Header(props: HeaderProps) -> Element {
    let on_nav = props.on_nav;
    let on_secret = props.on_secret;

    rsx! {
        header { class: "site-header glass-panel",
            div { class: "header-inner",
                div {
                    class: "logo",
                    onclick: move |_| on_nav.call(NavTarget::Top),

                    div {
                        class: "logo-mark",
                        title: "✨",
                        onclick: move |e: MouseEvent| {
                            e.stop_propagation();
                            tracing::debug!("Opening quote collection from logo");
                            on_secret.call(());
                        },
                        span { class: "logo-halo" }
                        span { class: "logo-badge",
                            Icon { glyph: Glyph::Heart, size: 18, filled: true }
                        }
                    }

                    span { class: "logo-text", "光棱自我" }
                }

                nav { class: "header-nav",
                    for item in NAV_ITEMS {
                        button {
                            key: "{item.id}",
                            class: "nav-link",
                            r#type: "button",
                            onclick: move |_| on_nav.call(NavTarget::parse(item.id)),
                            Icon {
                                glyph: item.glyph,
                                size: 16,
                                class: format!("nav-icon icon-{}", item.color.name()),
                            }
                            span { "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}

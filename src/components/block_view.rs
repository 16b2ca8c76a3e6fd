//! Block View Component
//!
//! Draws one rendered content block. Emphasis runs become `strong` spans
//! whose styling depends on the block they sit in.

use dioxus::prelude::*;
use prism_core::render::OutboundLink;
use prism_core::{Glyph, TextRun, VisualNode};
use prism_ui::Icon;

#[component]
pub fn BlockView(node: VisualNode) -> Element {
    match node {
        VisualNode::Empty => rsx! {},

        VisualNode::Paragraph { runs } => rsx! {
            p { class: "block-text", {text_runs(&runs, "emphasis-mark")} }
        },

        VisualNode::InfoBox { title, runs } => rsx! {
            div { class: "info-box",
                div { class: "info-box-title",
                    Icon { glyph: Glyph::Info, size: 18 }
                    span { "{title}" }
                }
                p { class: "info-box-text", {text_runs(&runs, "emphasis-info")} }
            }
        },

        VisualNode::Figure { src, caption } => rsx! {
            figure { class: "block-figure",
                img { src: "{src}", alt: caption.clone().unwrap_or_default() }
                if let Some(ref caption) = caption {
                    figcaption { "{caption}" }
                }
            }
        },

        VisualNode::Quote { text } => rsx! {
            blockquote { class: "block-quote",
                span { class: "quote-mark",
                    Icon { glyph: Glyph::Quote, size: 28 }
                }
                p { "{text}" }
            }
        },

        VisualNode::BulletList { items } => rsx! {
            ul { class: "block-list",
                for (idx, runs) in items.iter().enumerate() {
                    li { key: "{idx}",
                        span { class: "list-dot" }
                        span { {text_runs(runs, "emphasis-list")} }
                    }
                }
            }
        },

        VisualNode::LinkGrid { links } => rsx! {
            div { class: "link-grid",
                for link in links.iter() {
                    LinkTile { key: "{link.url}", link: link.clone() }
                }
            }
        },
    }
}

#[component]
fn LinkTile(link: OutboundLink) -> Element {
    rsx! {
        a {
            class: "link-tile",
            href: "{link.url}",
            target: OutboundLink::TARGET,
            rel: OutboundLink::REL,
            div { class: "link-tile-head",
                span { class: "link-tile-title", "{link.title}" }
                Icon { glyph: Glyph::ExternalLink, size: 14 }
            }
            p { class: "link-tile-desc", "{link.desc}" }
        }
    }
}

fn text_runs(runs: &[TextRun], emphasis_class: &'static str) -> Element {
    rsx! {
        for (idx, run) in runs.iter().enumerate() {
            {
                match run {
                    TextRun::Plain(text) => rsx! { span { key: "{idx}", "{text}" } },
                    TextRun::Emphasis(text) => rsx! {
                        strong { key: "{idx}", class: emphasis_class, "{text}" }
                    },
                }
            }
        }
    }
}

//! View models for content rendering.
//!
//! Everything here is a pure function of the content model: the UI layer
//! maps [`VisualNode`]s, [`Card`]s and [`DetailView`]s onto elements and
//! never looks at raw content blocks itself.

use crate::content::{Category, ColorTag, ContentBlock, LinkCard, Section};
use crate::emphasis::{self, TextRun};
use crate::icons::Glyph;

/// Stagger between consecutive blocks of a detail view.
pub const BLOCK_STAGGER_MS: u32 = 100;

/// An outbound link, always opened in a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundLink {
    pub title: String,
    pub url: String,
    pub desc: String,
}

impl OutboundLink {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}

impl From<&LinkCard> for OutboundLink {
    fn from(card: &LinkCard) -> Self {
        Self {
            title: card.title.clone(),
            url: card.url.clone(),
            desc: card.desc.clone(),
        }
    }
}

/// Rendered form of one content block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisualNode {
    /// Nothing to draw (unknown block tag)
    Empty,
    Paragraph { runs: Vec<TextRun> },
    InfoBox { title: String, runs: Vec<TextRun> },
    /// Image shown as-is; broken references are the webview's concern
    Figure { src: String, caption: Option<String> },
    /// Quote text, verbatim
    Quote { text: String },
    BulletList { items: Vec<Vec<TextRun>> },
    LinkGrid { links: Vec<OutboundLink> },
}

impl VisualNode {
    pub fn is_empty(&self) -> bool {
        matches!(self, VisualNode::Empty)
    }
}

/// Map a block to its visual form. Total over every tag.
pub fn render_block(block: &ContentBlock) -> VisualNode {
    match block {
        ContentBlock::Text { value } => VisualNode::Paragraph {
            runs: emphasis::split(value),
        },
        ContentBlock::InfoBox { title, value } => VisualNode::InfoBox {
            title: title.clone(),
            runs: emphasis::split(value),
        },
        ContentBlock::Image { value, alt } => VisualNode::Figure {
            src: value.clone(),
            caption: alt.clone(),
        },
        ContentBlock::Quote { value } => VisualNode::Quote { text: value.clone() },
        ContentBlock::List { value } => VisualNode::BulletList {
            items: value.iter().map(|item| emphasis::split(item)).collect(),
        },
        ContentBlock::LinkGrid { value } => VisualNode::LinkGrid {
            links: value.iter().map(OutboundLink::from).collect(),
        },
        ContentBlock::Unknown => {
            tracing::trace!("Skipping content block with unknown tag");
            VisualNode::Empty
        }
    }
}

/// CSS classes derived from a category colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub border: &'static str,
    pub icon: &'static str,
    pub hover_shadow: &'static str,
    /// Soft blob revealed on hover
    pub blob: &'static str,
}

impl Palette {
    pub fn for_color(color: ColorTag) -> Palette {
        let blob = if color == ColorTag::Pink { "blob-pink" } else { "blob-blue" };
        match color {
            ColorTag::Blue => Palette {
                border: "border-blue",
                icon: "icon-blue",
                hover_shadow: "shadow-blue",
                blob,
            },
            ColorTag::Pink => Palette {
                border: "border-pink",
                icon: "icon-pink",
                hover_shadow: "shadow-pink",
                blob,
            },
            ColorTag::Purple => Palette {
                border: "border-purple",
                icon: "icon-purple",
                hover_shadow: "shadow-purple",
                blob,
            },
            ColorTag::Cyan => Palette {
                border: "border-cyan",
                icon: "icon-cyan",
                hover_shadow: "shadow-cyan",
                blob,
            },
        }
    }
}

/// Summary card for one section. Holds the section itself, not a copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card<'a> {
    pub section: &'a Section,
    pub glyph: Glyph,
    pub palette: Palette,
}

impl<'a> Card<'a> {
    pub fn title(&self) -> &'a str {
        &self.section.title
    }

    pub fn short_description(&self) -> &'a str {
        &self.section.short_description
    }
}

/// Cards for `sections`, in input order. Content blocks are not rendered.
pub fn render_grid(sections: &[Section], color: ColorTag) -> Vec<Card<'_>> {
    let palette = Palette::for_color(color);
    sections
        .iter()
        .map(|section| Card {
            section,
            glyph: Glyph::resolve(section.icon.as_deref(), Glyph::SECTION_FALLBACK),
            palette,
        })
        .collect()
}

/// Header shown above a category's card grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryHeader<'a> {
    /// Anchor id used by navigation
    pub anchor: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub glyph: Glyph,
    pub color: ColorTag,
}

pub fn render_category_header(category: &Category) -> CategoryHeader<'_> {
    CategoryHeader {
        anchor: &category.id,
        title: &category.title,
        description: &category.description,
        glyph: Glyph::resolve(Some(&category.icon), Glyph::CATEGORY_FALLBACK),
        color: category.color,
    }
}

/// One block of a detail view with its entrance delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailBlock {
    pub node: VisualNode,
    pub delay_ms: u32,
}

/// Full view of a selected section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub section_id: String,
    pub title: String,
    pub blocks: Vec<DetailBlock>,
    /// Entrance delay of the closing divider and return button
    pub footer_delay_ms: u32,
}

/// Render every block of `section` in order. Deterministic for equal input.
pub fn render_detail(section: &Section) -> DetailView {
    let blocks = section
        .content
        .iter()
        .enumerate()
        .map(|(idx, block)| DetailBlock {
            node: render_block(block),
            delay_ms: stagger(idx),
        })
        .collect();

    DetailView {
        section_id: section.id.clone(),
        title: section.title.clone(),
        blocks,
        footer_delay_ms: stagger(section.content.len()),
    }
}

fn stagger(idx: usize) -> u32 {
    u32::try_from(idx)
        .unwrap_or(u32::MAX)
        .saturating_mul(BLOCK_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, icon: Option<&str>, content: Vec<ContentBlock>) -> Section {
        Section {
            id: id.to_string(),
            title: format!("{id} title"),
            short_description: format!("{id} short"),
            icon: icon.map(str::to_string),
            content,
        }
    }

    #[test]
    fn text_block_splits_emphasis() {
        let node = render_block(&ContentBlock::Text {
            value: "B **C** D".to_string(),
        });
        assert_eq!(
            node,
            VisualNode::Paragraph {
                runs: vec![
                    TextRun::Plain("B ".to_string()),
                    TextRun::Emphasis("C".to_string()),
                    TextRun::Plain(" D".to_string()),
                ]
            }
        );
    }

    #[test]
    fn quote_is_verbatim() {
        let node = render_block(&ContentBlock::Quote {
            value: "keep **this** raw".to_string(),
        });
        assert_eq!(
            node,
            VisualNode::Quote {
                text: "keep **this** raw".to_string()
            }
        );
    }

    #[test]
    fn list_items_each_split() {
        let node = render_block(&ContentBlock::List {
            value: vec!["**a** b".to_string(), "c".to_string()],
        });
        let VisualNode::BulletList { items } = node else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);
        assert!(items[0][1].is_emphasis());
        assert_eq!(items[1], vec![TextRun::Plain("c".to_string())]);
    }

    #[test]
    fn info_box_keeps_title() {
        let node = render_block(&ContentBlock::InfoBox {
            title: "Tip".to_string(),
            value: "x **y**".to_string(),
        });
        let VisualNode::InfoBox { title, runs } = node else {
            panic!("expected an info box");
        };
        assert_eq!(title, "Tip");
        assert_eq!(runs.len(), 3);
    }

    #[test]
    fn unknown_renders_empty() {
        assert!(render_block(&ContentBlock::Unknown).is_empty());
    }

    #[test]
    fn grid_preserves_order_and_identity() {
        let sections = vec![
            section("s2", Some("Heart"), vec![]),
            section("s1", Some("Bogus"), vec![]),
            section("s3", None, vec![]),
        ];
        let cards = render_grid(&sections, ColorTag::Purple);

        let ids: Vec<_> = cards.iter().map(|c| c.section.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s1", "s3"]);
        assert!(std::ptr::eq(cards[1].section, &sections[1]));
        assert_eq!(cards[0].glyph, Glyph::Heart);
        assert_eq!(cards[1].glyph, Glyph::Feather);
        assert_eq!(cards[2].glyph, Glyph::Feather);
        assert_eq!(cards[0].title(), "s2 title");
        assert_eq!(cards[0].palette.border, "border-purple");
    }

    #[test]
    fn detail_is_deterministic_and_staggered() {
        let s = section(
            "s1",
            None,
            vec![
                ContentBlock::Quote { value: "A".to_string() },
                ContentBlock::Unknown,
                ContentBlock::Text { value: "t".to_string() },
            ],
        );
        let first = render_detail(&s);
        let second = render_detail(&s);
        assert_eq!(first, second);

        let delays: Vec<_> = first.blocks.iter().map(|b| b.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200]);
        assert_eq!(first.footer_delay_ms, 300);
        assert!(first.blocks[1].node.is_empty());
    }

    #[test]
    fn pink_palette_uses_pink_blob() {
        assert_eq!(Palette::for_color(ColorTag::Pink).blob, "blob-pink");
        assert_eq!(Palette::for_color(ColorTag::Cyan).blob, "blob-blue");
    }
}

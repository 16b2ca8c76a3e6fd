//! Content model: categories, sections and typed content blocks.
//!
//! The dataset is loaded once (embedded JSON unless another model is
//! installed at startup) and lives for the rest of the process.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::quotes::collect_quotes;

/// Dataset compiled into the binary.
const EMBEDDED_CONTENT: &str = include_str!("../data/content.json");

static GLOBAL_CONTENT: OnceLock<ContentModel> = OnceLock::new();

/// Theme colour shared by a category and its cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Pink,
    Purple,
    Cyan,
}

impl ColorTag {
    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Pink => "pink",
            ColorTag::Purple => "purple",
            ColorTag::Cyan => "cyan",
        }
    }
}

/// Top-level grouping of sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Symbolic icon name, resolved through [`crate::icons::Glyph`]
    pub icon: String,
    pub color: ColorTag,
    pub sections: Vec<Section>,
}

/// A navigable unit of content belonging to exactly one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub content: Vec<ContentBlock>,
}

/// One entry of a link grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkCard {
    pub title: String,
    pub url: String,
    pub desc: String,
}

/// One unit of renderable section content.
///
/// Each variant carries exactly the fields its tag needs, so a payload that
/// does not match its `type` is rejected while the dataset is parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentBlock {
    /// Paragraph with `**emphasis**` markup
    Text { value: String },
    /// Image reference (URL or data URI) with optional caption
    Image {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    /// Quote rendered verbatim; collected into the quote scroll
    Quote { value: String },
    /// Bullet list, each item with `**emphasis**` markup
    List { value: Vec<String> },
    /// Grid of outbound links
    LinkGrid { value: Vec<LinkCard> },
    /// Titled callout with `**emphasis**` markup
    InfoBox { title: String, value: String },
    /// Any tag this build does not know; renders nothing
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Wire name of the block's tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Image { .. } => "image",
            ContentBlock::Quote { .. } => "quote",
            ContentBlock::List { .. } => "list",
            ContentBlock::LinkGrid { .. } => "link-grid",
            ContentBlock::InfoBox { .. } => "info-box",
            ContentBlock::Unknown => "unknown",
        }
    }

    /// Payload of a quote block, `None` for every other tag.
    pub fn as_quote(&self) -> Option<&str> {
        match self {
            ContentBlock::Quote { value } => Some(value),
            _ => None,
        }
    }
}

/// The full, validated dataset.
#[derive(Debug)]
pub struct ContentModel {
    categories: Vec<Category>,
    quotes: OnceLock<Vec<String>>,
}

impl ContentModel {
    /// Build a model, checking id invariants.
    pub fn new(categories: Vec<Category>) -> Result<Self, ContentError> {
        let mut category_ids = HashSet::new();
        let mut section_ids = HashSet::new();

        for category in &categories {
            if category.id.is_empty() {
                return Err(ContentError::EmptyId(format!("category '{}'", category.title)));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(ContentError::DuplicateCategory(category.id.clone()));
            }
            for section in &category.sections {
                if section.id.is_empty() {
                    return Err(ContentError::EmptyId(format!("section '{}'", section.title)));
                }
                if !section_ids.insert(section.id.as_str()) {
                    return Err(ContentError::DuplicateSection(section.id.clone()));
                }
            }
        }

        Ok(Self {
            categories,
            quotes: OnceLock::new(),
        })
    }

    /// Parse a dataset: a JSON array of categories.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// The dataset compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Install `model` as the process-wide dataset.
    ///
    /// Only the first call wins; later calls return the model already in place.
    pub fn install(model: ContentModel) -> &'static ContentModel {
        if GLOBAL_CONTENT.get().is_some() {
            tracing::warn!("Content model already installed, keeping the existing one");
        }
        let installed = GLOBAL_CONTENT.get_or_init(|| model);
        installed.log_loaded();
        installed
    }

    /// The process-wide dataset, falling back to the embedded one.
    pub fn global() -> &'static ContentModel {
        GLOBAL_CONTENT.get_or_init(|| {
            let model = Self::embedded().unwrap_or_else(|e| {
                tracing::error!(error = %e, "Embedded content is invalid, starting empty");
                Self {
                    categories: Vec::new(),
                    quotes: OnceLock::new(),
                }
            });
            model.log_loaded();
            model
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// All sections in dataset order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.categories.iter().flat_map(|c| c.sections.iter())
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections().find(|s| s.id == id)
    }

    /// Every quote in dataset order, computed on first access.
    pub fn quotes(&self) -> &[String] {
        self.quotes.get_or_init(|| collect_quotes(&self.categories))
    }

    fn log_loaded(&self) {
        tracing::info!(
            categories = self.categories.len(),
            sections = self.sections().count(),
            quotes = self.quotes().len(),
            "Content loaded"
        );
    }
}

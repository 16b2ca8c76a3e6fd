//! Prism Identity Core Library
//!
//! Content model, typed block rendering and the collectible quotes export
//! for the Prism Identity reader.
//!
//! ## Overview
//!
//! The dataset is a static tree (category → section → content block) that is
//! loaded once and never mutated. Everything the UI shows is derived from it
//! through pure functions:
//!
//! - [`render::render_block`] turns one content block into a [`VisualNode`]
//! - [`render::render_grid`] produces the summary cards of a category
//! - [`render::render_detail`] produces the full view of a selected section
//! - [`quotes::collect_quotes`] flattens every quote in dataset order
//! - [`collection::render_collection`] lays out the quote scroll for export
//!
//! The only mutable state is [`ViewState`], replaced wholesale by explicit
//! transition functions, and the export in-progress flag owned by
//! [`Exporter`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use prism_core::{collection, ContentModel, Exporter};
//!
//! let content = ContentModel::global();
//! let surface = collection::render_collection(content.quotes());
//!
//! let exporter = Exporter::to_directory("/tmp/downloads");
//! let outcome = exporter.export(surface).await?;
//! ```

pub mod collection;
pub mod content;
pub mod emphasis;
pub mod error;
pub mod export;
pub mod icons;
pub mod nav;
pub mod quotes;
pub mod render;
pub mod state;

// Re-exports
pub use collection::{CollectionSurface, QuoteEntry};
pub use content::{Category, ColorTag, ContentBlock, ContentModel, LinkCard, Section};
pub use emphasis::TextRun;
pub use error::{ContentError, ExportError, PrismError, PrismResult};
pub use export::{ExportOutcome, Exporter};
pub use icons::Glyph;
pub use nav::NavTarget;
pub use render::{Card, DetailView, VisualNode};
pub use state::ViewState;

/// Tag used as the prefix of exported file names.
pub const PRODUCT_TAG: &str = "prism-ink-collection";

//! Page components for Prism Identity.
//!
//! Shared primitives (buttons, icons, modal shell) live in `prism-ui`;
//! the pieces here are specific to this page.

mod block_view;
mod category_block;
mod floating_elements;
mod header;
mod hero;
mod quote_collection;
mod section_detail;
mod section_grid;
mod site_footer;

pub use block_view::BlockView;
pub use category_block::CategoryBlock;
pub use floating_elements::FloatingElements;
pub use header::Header;
pub use hero::Hero;
pub use quote_collection::QuoteCollection;
pub use section_detail::SectionDetail;
pub use section_grid::SectionGrid;
pub use site_footer::SiteFooter;

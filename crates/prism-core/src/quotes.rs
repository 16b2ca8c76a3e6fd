//! Quote aggregation across the whole dataset.

use crate::content::Category;

/// Flatten every quote block in (category, section, content) order.
///
/// Pure: the same input always yields the same list and nothing is mutated.
pub fn collect_quotes(categories: &[Category]) -> Vec<String> {
    categories
        .iter()
        .flat_map(|category| category.sections.iter())
        .flat_map(|section| section.content.iter())
        .filter_map(|block| block.as_quote())
        .map(str::to_string)
        .collect()
}

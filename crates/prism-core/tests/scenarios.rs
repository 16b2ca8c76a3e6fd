//! End-to-end reader scenarios
//!
//! Walks the content model through the same steps the UI does: browse a
//! category grid, open sections, gather quotes, lay out the quote scroll.

use prism_core::collection::render_collection;
use prism_core::quotes::collect_quotes;
use prism_core::render::{render_detail, render_grid};
use prism_core::{ContentModel, TextRun, ViewState, VisualNode};

const LIFE: &str = r#"[
    {
        "id": "life",
        "title": "Life",
        "description": "",
        "icon": "BookOpen",
        "color": "pink",
        "sections": [
            {
                "id": "s1",
                "title": "One",
                "shortDescription": "first",
                "content": [
                    { "type": "quote", "value": "A" },
                    { "type": "text", "value": "B **C** D" }
                ]
            },
            {
                "id": "s2",
                "title": "Two",
                "shortDescription": "second",
                "content": [
                    { "type": "list", "value": ["x"] }
                ]
            }
        ]
    }
]"#;

// ============================================================================
// Quotes and block rendering
// ============================================================================

#[test]
fn quote_and_emphasis_scenario() {
    let model = ContentModel::from_json(LIFE).unwrap();

    assert_eq!(collect_quotes(model.categories()), vec!["A".to_string()]);

    let detail = render_detail(model.section("s1").unwrap());
    assert_eq!(
        detail.blocks[1].node,
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
fn unknown_block_in_dataset_renders_nothing() {
    let json = LIFE.replace(
        r#"{ "type": "list", "value": ["x"] }"#,
        r#"{ "type": "carousel", "value": ["x"] }, { "type": "list", "value": ["y"] }"#,
    );
    let model = ContentModel::from_json(&json).unwrap();
    let detail = render_detail(model.section("s2").unwrap());

    assert_eq!(detail.blocks.len(), 2);
    assert!(detail.blocks[0].node.is_empty());
    assert!(matches!(detail.blocks[1].node, VisualNode::BulletList { .. }));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn card_click_opens_detail_and_close_clears() {
    let model = ContentModel::from_json(LIFE).unwrap();
    let category = &model.categories()[0];
    let cards = render_grid(&category.sections, category.color);

    let state = ViewState::new().select(cards[0].section);
    assert_eq!(state.selected_section().map(|s| s.id.as_str()), Some("s1"));

    let state = state.clear_selection();
    assert!(state.selected_section().is_none());
}

#[test]
fn clicking_second_card_replaces_first() {
    let model = ContentModel::from_json(LIFE).unwrap();
    let category = &model.categories()[0];
    let cards = render_grid(&category.sections, category.color);

    let showing_s1 = ViewState::new().select(cards[0].section);
    let showing_s2 = showing_s1.select(cards[1].section);

    let section = showing_s2.selected_section().unwrap();
    let detail = render_detail(section);
    assert_eq!(detail.section_id, "s2");
    // Only s2's blocks, nothing carried over from s1.
    assert_eq!(detail.blocks.len(), 1);
    assert!(matches!(detail.blocks[0].node, VisualNode::BulletList { .. }));
}

// ============================================================================
// Quote collection
// ============================================================================

#[test]
fn collection_matches_aggregated_order() {
    let model = ContentModel::embedded().unwrap();
    let surface = render_collection(model.quotes());

    assert_eq!(surface.entries.len(), model.quotes().len());
    for (idx, (entry, quote)) in surface.entries.iter().zip(model.quotes()).enumerate() {
        assert_eq!(&entry.text, quote);
        assert_eq!(entry.number, format!("{:02}", idx + 1));
    }
}

#[test]
fn global_model_is_shared() {
    let a = ContentModel::global();
    let b = ContentModel::global();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.categories().len(), 4);
}

use dioxus::prelude::*;
use prism_core::nav::START_TARGET;
use prism_core::{ContentModel, Exporter, NavTarget, Section, ViewState};

use crate::components::{
    CategoryBlock, FloatingElements, Header, Hero, QuoteCollection, SectionDetail, SiteFooter,
};
use crate::context::config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the selection state and composes the page. Every state change goes
/// through a [`ViewState`] transition and replaces the whole snapshot.
#[component]
pub fn App() -> Element {
    let content = ContentModel::global();
    let mut view: Signal<ViewState<'static>> = use_signal(ViewState::new);

    use_context_provider(|| Exporter::to_directory(config().download_dir.clone()));

    let on_select = move |section: &'static Section| view.set(view().select(section));

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "app-shell",
            FloatingElements {}

            Header {
                on_nav: move |target: NavTarget| scroll_to(&target),
                on_secret: move |_| view.set(view().open_export()),
            }

            main { class: "app-main",
                Hero { on_start: move |_| scroll_to(&NavTarget::parse(START_TARGET)) }

                div { class: "category-list",
                    for category in content.categories() {
                        CategoryBlock {
                            key: "{category.id}",
                            category: category,
                            on_select: on_select,
                        }
                    }
                }
            }

            SiteFooter {}

            if let Some(section) = view().selected_section() {
                SectionDetail {
                    key: "{section.id}",
                    section: section,
                    on_close: move |_| view.set(view().clear_selection()),
                }
            }

            if view().is_export_open() {
                QuoteCollection {
                    quotes: content.quotes(),
                    on_close: move |_| view.set(view().close_export()),
                }
            }
        }
    }
}

/// Smoothly scroll the webview to `target`.
fn scroll_to(target: &NavTarget) {
    tracing::debug!(?target, "Navigating");
    // The scroll script produces no value to wait for.
    document::eval(&target.scroll_script());
}

//! Quote Collection Component
//!
//! Rice-paper scroll of every quote in the dataset, with a button that
//! saves the scroll as a PNG. A failed save shows a native error dialog
//! and leaves the modal open.

use dioxus::prelude::*;
use prism_core::collection::render_collection;
use prism_core::{ExportError, ExportOutcome};
use prism_ui::{BusyButton, CloseButton, Modal, ModalTone};

use crate::context::{use_export_busy, use_exporter};

#[derive(Props, Clone, PartialEq)]
pub struct QuoteCollectionProps {
    pub quotes: &'static [String],
    pub on_close: EventHandler<()>,
}

#[component]
pub fn QuoteCollection(props: QuoteCollectionProps) -> Element {
    let exporter = use_exporter();
    let quotes = props.quotes;
    let surface = use_hook(move || render_collection(quotes));

    let mut saving = use_export_busy();

    let save = {
        let surface = surface.clone();
        move |_: ()| {
            if saving() {
                return;
            }
            saving.set(true);

            let exporter = exporter.clone();
            let surface = surface.clone();
            spawn(async move {
                match exporter.export(surface).await {
                    Ok(ExportOutcome::Saved { path, bytes }) => {
                        tracing::info!(path = %path.display(), bytes, "Quote scroll saved");
                    }
                    Ok(ExportOutcome::AlreadyRunning) => {
                        tracing::debug!("Save ignored, export already running");
                    }
                    Err(e) => show_failure(&e).await,
                }
            });
        }
    };

    rsx! {
        Modal { tone: ModalTone::Paper, on_close: props.on_close,
            div { class: "collection-toolbar",
                BusyButton {
                    busy: saving(),
                    label: "保存珍藏长卷".to_string(),
                    busy_label: "宣纸铺展中...".to_string(),
                    onclick: save,
                }
                CloseButton { onclick: props.on_close }
            }

            div { class: "collection-scroll",
                article { class: "scroll-paper",
                    span { class: "ink-wash ink-wash--top" }
                    span { class: "ink-wash ink-wash--bottom" }

                    header { class: "scroll-head",
                        h2 { class: "scroll-title", "{surface.title}" }
                        p { class: "scroll-subtitle", "{surface.subtitle}" }
                    }

                    ol { class: "scroll-entries",
                        for entry in surface.entries.iter() {
                            li { key: "{entry.number}", class: "scroll-entry",
                                span { class: "entry-number", "No.{entry.number}" }
                                p { class: "entry-text", "{entry.text}" }
                            }
                        }
                    }

                    footer { class: "scroll-foot",
                        div { class: "scroll-seal",
                            span { "{surface.seal[0]}" }
                            span { "{surface.seal[1]}" }
                        }
                        p { class: "scroll-footer-line", "{surface.footer}" }
                    }
                }
            }
        }
    }
}

async fn show_failure(error: &ExportError) {
    tracing::warn!(error = %error, "Showing export failure notice");
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("拾光集")
        .set_description(error.user_message())
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

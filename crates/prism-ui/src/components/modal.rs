//! Modal shell.
//!
//! A full-screen backdrop that closes on click, with a panel that swallows
//! clicks so interacting with content never dismisses it.

use dioxus::prelude::*;

/// Backdrop tint and panel flavour
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModalTone {
    /// Frosted glass over a light tint (section details)
    #[default]
    Glass,
    /// Rice paper over a darker tint (quote collection)
    Paper,
}

impl ModalTone {
    pub fn overlay_class(&self) -> &'static str {
        match self {
            ModalTone::Glass => "modal-overlay modal-overlay--glass",
            ModalTone::Paper => "modal-overlay modal-overlay--paper",
        }
    }

    pub fn panel_class(&self) -> &'static str {
        match self {
            ModalTone::Glass => "modal-panel modal-panel--glass",
            ModalTone::Paper => "modal-panel modal-panel--paper",
        }
    }
}

/// Modal container
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         tone: ModalTone::Paper,
///         on_close: move |_| view.set(view().close_export()),
///         h2 { "拾光集" }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    #[props(default)] tone: ModalTone,
    /// Called when the backdrop is clicked
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-root",
            div {
                class: tone.overlay_class(),
                onclick: move |_| on_close.call(()),
            }
            div {
                class: tone.panel_class(),
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| e.stop_propagation(),
                {children}
            }
        }
    }
}

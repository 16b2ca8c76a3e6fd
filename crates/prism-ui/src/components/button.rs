//! Button Components
//!
//! Various button styles following the design system:
//! - Primary: Gradient pill for the main action (start, save)
//! - Soft: White pill used for "return" style actions
//! - Icon: Round icon-only buttons (back, close)

use dioxus::prelude::*;
use prism_core::Glyph;

use crate::components::{Icon, Spinner};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Blue → purple → pink gradient pill
    #[default]
    Primary,
    /// White pill with a soft border
    Soft,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Soft => "btn-soft",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component following the design system
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Soft,
///         onclick: move |_| on_close.call(()),
///         "已阅 · 返回"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, back, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// Glyph drawn inside the button
    pub glyph: Glyph,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            Icon { glyph: props.glyph, size: 20 }
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            glyph: Glyph::X,
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
        }
    }
}

/// Primary button that swaps to a spinner while `busy`, and is disabled then.
#[component]
pub fn BusyButton(
    /// Whether the guarded action is running
    busy: bool,
    /// Label shown while idle
    label: String,
    /// Label shown while busy
    busy_label: String,
    /// Glyph shown while idle
    #[props(default = Glyph::Download)]
    glyph: Glyph,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "btn-primary btn-busy",
            r#type: "button",
            disabled: busy,
            onclick: move |_| {
                if !busy {
                    onclick.call(());
                }
            },
            if busy {
                Spinner {}
                span { "{busy_label}" }
            } else {
                Icon { glyph: glyph, size: 18 }
                span { "{label}" }
            }
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

//! Prism Identity UI Components
//!
//! Dioxus primitives shared by the reader's pages, styled for the
//! ink-wash aesthetic of the global stylesheet.
//!
//! ## Design Language
//!
//! - **Blue (#60a5fa)**, **purple (#a78bfa)** and **pink (#f472b6)**: accents, gradients
//! - **Ink (#1e293b)**: titles and body text
//! - **Rice paper (#FDFBF7)**: the quote scroll and its export
//! - Glass panels over soft watercolour blobs; nothing harsh

pub mod components;

pub use components::*;

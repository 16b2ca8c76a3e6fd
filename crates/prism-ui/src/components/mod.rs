//! Reusable UI components
//!
//! All components are stateless apart from what their props carry; page
//! state lives in the root `App`.

mod button;
mod icon;
mod modal;

pub use button::*;
pub use icon::*;
pub use modal::*;

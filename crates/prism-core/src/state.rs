//! Selection state owned by the top-level view.
//!
//! [`ViewState`] is an immutable snapshot. Each user action goes through a
//! transition function that returns the next snapshot; the UI stores it and
//! re-renders from it.

use crate::content::Section;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState<'a> {
    selected_section: Option<&'a Section>,
    export_open: bool,
}

impl<'a> ViewState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Section whose detail view is shown, if any.
    pub fn selected_section(&self) -> Option<&'a Section> {
        self.selected_section
    }

    pub fn is_export_open(&self) -> bool {
        self.export_open
    }

    /// Card click. Replaces any current selection in a single step.
    pub fn select(self, section: &'a Section) -> Self {
        tracing::debug!(section = %section.id, "Section selected");
        Self {
            selected_section: Some(section),
            ..self
        }
    }

    /// Detail view closed.
    pub fn clear_selection(self) -> Self {
        Self {
            selected_section: None,
            ..self
        }
    }

    /// Secondary trigger on the header logo.
    pub fn open_export(self) -> Self {
        tracing::debug!("Quote collection opened");
        Self {
            export_open: true,
            ..self
        }
    }

    pub fn close_export(self) -> Self {
        Self {
            export_open: false,
            ..self
        }
    }

    /// Whether `section` is the one currently shown (by identity).
    pub fn is_selected(&self, section: &Section) -> bool {
        self.selected_section
            .is_some_and(|current| std::ptr::eq(current, section))
    }
}

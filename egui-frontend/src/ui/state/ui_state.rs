//! # UI State Module
//!
//! This module contains general UI state that affects the overall user experience
//! but is not specific to any particular component.
//!
//! ## Responsibilities:
//! - The dashboard's read-only output text
//! - Message boxes confirming success or reporting a failure
//!
//! ## Purpose:
//! This separates user feedback from business logic and component-specific state,
//! so every action reports its outcome the same way.

/// Severity of a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message box waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct UIState {
    /// Contents of the dashboard output area
    pub output: String,

    pub notice: Option<Notice>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_output(&mut self, text: String) {
        self.output = text;
    }

    pub fn show_info(&mut self, title: &str, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            title: title.to_string(),
            text: text.into(),
        });
    }

    pub fn show_error(&mut self, title: &str, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            title: title.to_string(),
            text: text.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Reset everything on logout
    pub fn clear(&mut self) {
        self.output.clear();
        self.notice = None;
    }
}

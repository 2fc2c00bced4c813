//! Toast notification system
//!
//! A one-line message bar shown under the incident list after an action.

use iocraft::prelude::*;

use crate::tui::theme::{ThemeMode, theme};

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The message to display
    pub message: String,
    /// The severity level of the toast
    pub level: ToastLevel,
}

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self { message, level }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    /// Get the color associated with this toast's level
    pub fn color(&self, mode: ThemeMode) -> Color {
        let theme = theme(mode);
        match self.level {
            ToastLevel::Info => theme.id_color,
            ToastLevel::Success => theme.severity_low,
        }
    }
}

/// Render a toast notification as an optional element
pub fn render_toast(toast: &Option<Toast>, mode: ThemeMode) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        let color = t.color(mode);
        element! {
            View(
                width: 100pct,
                height: 2,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: color,
            ) {
                Text(content: t.message.clone(), color: color)
            }
        }
        .into_any()
    })
}

//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::{ThemeMode, theme};

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-s", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Submit", "Next field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
    pub mode: ThemeMode,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme(props.mode);

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.border_focused,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text_dimmed,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for browsing the incident list
pub fn dashboard_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_navigation()
        .add("Enter", "Details")
        .add("f/F", "Filter")
        .add("s", "Sort")
        .add("c", "Collapse")
        .add("t", "Theme")
        .add("n", "Report")
        .with_quit()
        .build()
}

/// Shortcuts for the report form modal
pub fn report_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab", "Next Field")
        .add("S-Tab", "Prev Field")
        .add("←/→", "Severity")
        .add("C-s", "Submit")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts shown when empty state is displayed
pub fn empty_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("f/F", "Filter")
        .add("t", "Theme")
        .add("n", "Report")
        .with_quit()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_shortcuts_cover_keys() {
        let shortcuts = dashboard_shortcuts();
        for key in ["j/k", "Enter", "f/F", "s", "t", "n", "q"] {
            assert!(shortcuts.iter().any(|s| s.key == key), "missing {key}");
        }
    }

    #[test]
    fn test_report_shortcuts_submit() {
        assert!(report_shortcuts().contains(&Shortcut::new("C-s", "Submit")));
    }
}

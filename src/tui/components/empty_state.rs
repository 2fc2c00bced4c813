//! Empty state component
//!
//! Shown in place of the incident list when there is nothing to display.

use iocraft::prelude::*;

use crate::query::SeverityFilter;
use crate::tui::theme::{ThemeMode, theme};

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// The store holds no incidents at all
    #[default]
    NoIncidents,
    /// Incidents exist but none match the active filter
    NoMatches,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Active filter (for NoMatches)
    pub filter: SeverityFilter,
    pub mode: ThemeMode,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme(props.mode);

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::NoIncidents => (
            "i",
            "No Incidents",
            "No incidents have been reported yet.".to_string(),
            "Press 'n' to report one.",
        ),
        EmptyStateKind::NoMatches => (
            "?",
            "No Matches",
            format!("No incidents with severity {}.", props.filter),
            "Press 'f' to change the filter.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            View(margin_top: 2) {
                Text(
                    content: hint,
                    color: theme.text_dimmed,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_kind_default() {
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::NoIncidents);
    }
}

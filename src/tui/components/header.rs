//! App header bar component
//!
//! Displays the dashboard title, per-severity totals and the theme mode.

use iocraft::prelude::*;

use crate::store::SeverityCounts;
use crate::tui::theme::{ThemeMode, theme};
use crate::types::Severity;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Totals across the whole store
    pub counts: SeverityCounts,
    pub mode: ThemeMode,
}

/// App header bar showing title and incident totals
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme(props.mode);

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.border_focused,
        ) {
            Text(
                content: "AI Safety Incident Dashboard",
                color: theme.header_text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(Severity::ALL.iter().rev().map(|&severity| element! {
                    Text(
                        content: format!("{} {}", severity, props.counts.get(severity)),
                        color: theme.header_text,
                    )
                }))
                Text(
                    content: format!("{} total", props.counts.total()),
                    color: theme.header_text,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("[{}]", props.mode),
                    color: theme.header_text,
                )
            }
        }
    }
}

//! Compact inline selector component for enum fields
//!
//! Displays as: Label: ◀ value ▶. Used by the filter/sort toolbar and the
//! severity field of the report form.

use iocraft::prelude::*;

use crate::query::{SeverityFilter, SortOrder};
use crate::tui::components::Clickable;
use crate::tui::theme::{ThemeMode, theme};
use crate::types::Severity;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// List of options to choose from
    pub options: Vec<String>,
    /// Index of the currently selected option
    pub selected_index: usize,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Optional color for the value (severity coloring)
    pub value_color: Option<Color>,
    pub mode: ThemeMode,
    /// Handler invoked when left arrow is clicked (cycle backward)
    pub on_prev: Option<Handler<()>>,
    /// Handler invoked when right arrow is clicked (cycle forward)
    pub on_next: Option<Handler<()>>,
}

/// Compact inline selector component with arrow indicators
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme(props.mode);

    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };

    let value_color = props.value_color.unwrap_or(theme.text);

    let current_value = props
        .options
        .get(props.selected_index)
        .cloned()
        .unwrap_or_default();

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: accent,
                )
            }))
            Clickable(
                on_click: props.on_prev.clone(),
            ) {
                Text(
                    content: "◀",
                    color: accent,
                )
            }
            Text(
                content: current_value,
                color: value_color,
                weight: if props.has_focus { Weight::Bold } else { Weight::Normal },
            )
            Clickable(
                on_click: props.on_next.clone(),
            ) {
                Text(
                    content: "▶",
                    color: accent,
                )
            }
        }
    }
}

/// Helper trait for types that can be used with Select
pub trait Selectable: Sized + Clone + Copy + PartialEq + 'static {
    /// Get all possible values for this type, in cycling order
    fn all_values() -> Vec<Self>;
    /// Get the display string for this value
    fn display(&self) -> String;
    /// Get the index of this value in all_values
    fn index(&self) -> usize {
        Self::all_values()
            .iter()
            .position(|v| v == self)
            .unwrap_or(0)
    }
}

impl Selectable for Severity {
    fn all_values() -> Vec<Self> {
        Severity::ALL.to_vec()
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl Selectable for SeverityFilter {
    fn all_values() -> Vec<Self> {
        SeverityFilter::CYCLE.to_vec()
    }

    fn display(&self) -> String {
        self.label()
    }
}

impl Selectable for SortOrder {
    fn all_values() -> Vec<Self> {
        vec![SortOrder::Desc, SortOrder::Asc]
    }

    fn display(&self) -> String {
        format!("{} {}", self.arrow(), self.label())
    }
}

/// Get option strings for a selectable type
pub fn options_for<T: Selectable>() -> Vec<String> {
    T::all_values().iter().map(|v| v.display()).collect()
}

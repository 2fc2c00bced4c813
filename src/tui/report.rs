//! Report form modal
//!
//! Pure renderer for the new-incident form. Key handling lives in the
//! dashboard reducer, so this component only draws the draft it is given.

use iocraft::prelude::*;

use crate::form::FormField;
use crate::tui::components::{
    ModalContainer, ModalOverlay, ModalWidth, Select, Selectable, options_for,
};
use crate::tui::dashboard::model::ReportState;
use crate::tui::theme::{ThemeMode, theme};
use crate::types::Severity;

/// Cursor glyph drawn at the end of the focused text field
const CURSOR: &str = "█";

/// Props for the ReportForm component
#[derive(Default, Props)]
pub struct ReportFormProps {
    pub report: ReportState,
    pub mode: ThemeMode,
}

/// Text shown for a field value, with the cursor when focused
fn field_text(value: &str, focused: bool, placeholder: &str) -> (String, bool) {
    match (value.is_empty(), focused) {
        (true, false) => (placeholder.to_string(), true),
        (_, true) => (format!("{value}{CURSOR}"), false),
        (false, false) => (value.to_string(), false),
    }
}

#[component]
pub fn ReportForm(props: &ReportFormProps) -> impl Into<AnyElement<'static>> {
    let theme = theme(props.mode);
    let report = &props.report;
    let form = &report.form;
    let focused = report.focused;

    let text_field = |field: FormField, value: &str, placeholder: &str, height: u32| {
        let has_focus = focused == field;
        let (content, dimmed) = field_text(value, has_focus, placeholder);
        element! {
            View(flex_direction: FlexDirection::Column, margin_bottom: 1) {
                Text(
                    content: format!("{}:", field),
                    color: if has_focus { theme.border_focused } else { theme.text_dimmed },
                    weight: Weight::Bold,
                )
                View(
                    width: 100pct,
                    min_height: height,
                    border_style: BorderStyle::Round,
                    border_color: if has_focus { theme.border_focused } else { theme.border },
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    Text(
                        content: content,
                        color: if dimmed { theme.text_dimmed } else { theme.text },
                        wrap: TextWrap::Wrap,
                    )
                }
            }
        }
        .into_any()
    };

    let title = text_field(FormField::Title, form.title(), "What happened?", 3);
    let description = text_field(
        FormField::Description,
        form.description(),
        "Describe the incident",
        6,
    );

    let severity = form.severity();

    element! {
        ModalOverlay(show_backdrop: true) {
            ModalContainer(
                width: ModalWidth::Percent(70),
                mode: props.mode,
                title: "Report New Incident".to_string(),
                footer_text: "Tab next field  ←/→ severity  Ctrl-s submit".to_string(),
            ) {
                #([title, description])
                Select(
                    label: Some("Severity"),
                    options: options_for::<Severity>(),
                    selected_index: severity.index(),
                    has_focus: focused == FormField::Severity,
                    value_color: Some(theme.severity_color(severity)),
                    mode: props.mode,
                )
                #(report.error.as_ref().map(|error| element! {
                    View(margin_top: 1) {
                        Text(content: format!("✗ {}", error), color: theme.error, weight: Weight::Bold)
                    }
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_text_placeholder_when_blank() {
        assert_eq!(
            field_text("", false, "hint"),
            ("hint".to_string(), true)
        );
    }

    #[test]
    fn test_field_text_cursor_when_focused() {
        assert_eq!(field_text("", true, "hint"), (CURSOR.to_string(), false));
        assert_eq!(
            field_text("abc", true, "hint"),
            (format!("abc{CURSOR}"), false)
        );
    }

    #[test]
    fn test_field_text_plain() {
        assert_eq!(field_text("abc", false, "hint"), ("abc".to_string(), false));
    }
}

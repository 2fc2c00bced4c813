//! Modal container component
//!
//! A bordered box with a title row, a content area and an optional footer.

use iocraft::prelude::*;

use crate::tui::theme::{ThemeMode, theme};

/// Modal width configuration
#[derive(Clone)]
pub enum ModalWidth {
    Fixed(u32),
    Percent(u32),
}

impl Default for ModalWidth {
    fn default() -> Self {
        Self::Fixed(60)
    }
}

/// Props for the ModalContainer component
#[derive(Default, Props)]
pub struct ModalContainerProps<'a> {
    pub width: Option<ModalWidth>,
    pub mode: ThemeMode,
    pub title: Option<String>,
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

#[component]
pub fn ModalContainer<'a>(props: &mut ModalContainerProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme(props.mode);
    let width = props.width.clone().unwrap_or_default();
    let title = props.title.clone();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: match width {
                ModalWidth::Fixed(n) => Size::Length(n),
                ModalWidth::Percent(n) => Size::Percent(n as f32),
            },
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: theme.border_focused,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            #(title.map(|title| element! {
                View(
                    width: 100pct,
                    padding_bottom: 1,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                    flex_direction: FlexDirection::Row,
                ) {
                    Text(
                        content: title,
                        color: theme.id_color,
                        weight: Weight::Bold,
                    )
                    View(flex_grow: 1.0)
                    Text(content: "Esc to cancel", color: theme.text_dimmed)
                }
            }))

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|footer| element! {
                View(
                    width: 100pct,
                    padding_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: footer, color: theme.text_dimmed)
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_width_default() {
        assert!(matches!(ModalWidth::default(), ModalWidth::Fixed(60)));
    }

    #[test]
    fn test_modal_container_props_default() {
        let props = ModalContainerProps::default();
        assert!(props.title.is_none());
        assert!(props.footer_text.is_none());
        assert_eq!(props.mode, ThemeMode::Light);
    }
}

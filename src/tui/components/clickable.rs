//! Clickable wrapper component for mouse interaction
//!
//! Events are delivered only when they occur within the wrapped child's
//! bounds.

use iocraft::prelude::*;

/// Props for the Clickable component
#[derive(Default, Props)]
pub struct ClickableProps<'a> {
    /// Child element to wrap
    pub children: Vec<AnyElement<'a>>,
    /// Handler invoked when component is clicked
    pub on_click: Option<Handler<()>>,
    /// Handler invoked when mouse wheel scrolls up
    pub on_scroll_up: Option<Handler<()>>,
    /// Handler invoked when mouse wheel scrolls down
    pub on_scroll_down: Option<Handler<()>>,
}

/// Generic clickable wrapper component with automatic hit-testing
#[component]
pub fn Clickable<'a>(
    props: &mut ClickableProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let on_click = props.on_click.clone();
    let on_scroll_up = props.on_scroll_up.clone();
    let on_scroll_down = props.on_scroll_down.clone();

    hooks.use_local_terminal_events({
        move |event| {
            if let TerminalEvent::FullscreenMouse(mouse_event) = event {
                let handler = match mouse_event.kind {
                    MouseEventKind::Down(_) => on_click.as_ref(),
                    MouseEventKind::ScrollUp => on_scroll_up.as_ref(),
                    MouseEventKind::ScrollDown => on_scroll_down.as_ref(),
                    _ => None,
                };
                if let Some(handler) = handler {
                    handler(());
                }
            }
        }
    });

    match props.children.iter_mut().next() {
        Some(child) => child.into(),
        None => element!(View).into_any(),
    }
}

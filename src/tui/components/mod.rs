//! Shared TUI components
//!
//! Reusable pieces of the dashboard screen and the report modal.

pub mod clickable;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod incident_card;
pub mod incident_list;
pub mod modal_container;
pub mod modal_overlay;
pub mod select;
pub mod shortcuts;
pub mod toast;

pub use clickable::{Clickable, ClickableProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, dashboard_shortcuts, empty_shortcuts, report_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use incident_card::{COLLAPSED_CARD_ROWS, IncidentCard, IncidentCardProps, card_height};
pub use incident_list::{IncidentList, IncidentListProps, cards_shown, cards_that_fit};
pub use modal_container::{ModalContainer, ModalContainerProps, ModalWidth};
pub use modal_overlay::{MODAL_BACKDROP, ModalOverlay, ModalOverlayProps};
pub use select::{Select, SelectProps, Selectable, options_for};
pub use toast::{Toast, ToastLevel, render_toast};

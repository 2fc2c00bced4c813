//! Dashboard command (`incident-board view`)
//!
//! Builds the session's store from configuration and runs the fullscreen
//! dashboard until the user quits.

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{IncidentError, Result};
use crate::tui::{DashboardState, IncidentDashboard};

/// Initial dashboard state from configuration
pub fn initial_state(config: &Config) -> Result<DashboardState> {
    let store = config.build_store()?;
    Ok(DashboardState::new(
        store,
        config.filter()?,
        config.order()?,
        config.theme,
    ))
}

/// Launch the incident dashboard TUI
pub fn cmd_view(config: &Config) -> Result<()> {
    let initial = initial_state(config)?;
    tracing::info!(
        incidents = initial.store.len(),
        filter = %initial.filter,
        order = %initial.order,
        "starting dashboard"
    );

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| IncidentError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(IncidentDashboard(initial: initial))
            .fullscreen()
            .await
            .map_err(|e| IncidentError::Other(format!("TUI error: {}", e)))
    })
}

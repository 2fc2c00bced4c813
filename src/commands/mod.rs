mod config;
mod ls;
mod view;

pub use config::cmd_config_show;
pub use ls::{LsOptions, cmd_ls, render_listing};
pub use view::{cmd_view, initial_state};

use crate::error::Result;

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

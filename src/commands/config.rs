//! `config` command: display the effective configuration.

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use super::print_json;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(config: &Config, json: bool) -> Result<()> {
    let path = Config::config_path();

    if json {
        return print_json(&json!({
            "path": path,
            "config": config,
        }));
    }

    match &path {
        Some(path) if path.exists() => {
            println!("{} {}", dimmed("# loaded from"), path.display());
        }
        Some(path) => {
            println!(
                "{} {} {}",
                dimmed("# defaults;"),
                path.display(),
                dimmed("does not exist")
            );
        }
        None => println!("{}", dimmed("# defaults; no config directory")),
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn dimmed(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |t| t.dimmed())
        .to_string()
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboarding;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use std::process::Command;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        open_privacy,
        reset_onboarding,
    } = cmd
    {
        let mut kv = SqliteKv::open(&cfg.database)?;

        header("Settings");
        println!("Version        : {}", env!("CARGO_PKG_VERSION"));
        println!("Database       : {}", kv.location());
        println!("Config file    : {}", Config::config_file().display());
        println!("Default filter : {}", cfg.default_filter.as_str());
        println!(
            "Privacy policy : {}",
            if cfg.privacy_policy_url.is_empty() {
                "(not configured)"
            } else {
                cfg.privacy_policy_url.as_str()
            }
        );

        if *reset_onboarding {
            onboarding::reset(&mut kv)?;
            success("The welcome screen will be shown again on the next run.");
        }

        if *open_privacy {
            if cfg.privacy_policy_url.is_empty() {
                warning("No privacy_policy_url in the configuration file.");
            } else if let Err(e) = open_url(&cfg.privacy_policy_url) {
                warning(format!("Could not open {}: {}", cfg.privacy_policy_url, e));
            }
        }
    }

    Ok(())
}

/// Hand a link to the platform opener.
fn open_url(url: &str) -> std::io::Result<()> {
    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", "", url]).status()?
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(url).status()?
    } else {
        Command::new("xdg-open").arg(url).status()?
    };

    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("opener exited with {}", status)))
    }
}

//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let value = ctx.config.get(key)?;
    println!("{}", value);
    Ok(())
}

/// Set a configuration value and write it back.
///
/// Writes to `--config` if given, then to the file the config was loaded
/// from, then to the canonical location.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let mut config = ctx.config.clone();
    config.set(key, value)?;

    let path = match (&ctx.config_path, config.loaded_from()) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => path.to_path_buf(),
        (None, None) => Config::default_path()?,
    };

    Config::write(&path, &config.global)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    let message = format!("Set {} = {} in {}", key, config.get(key)?, path.display());
    output::print(message, ctx.verbosity);
    Ok(())
}

/// List every configuration value.
pub fn list(ctx: &Context) -> Result<()> {
    for key in Config::KEYS {
        println!("{} = {}", key, ctx.config.get(key)?);
    }
    match ctx.config.loaded_from() {
        Some(path) => output::print(format!("# loaded from {}", path.display()), ctx.verbosity),
        None => output::print("# defaults (no config file found)", ctx.verbosity),
    }
    Ok(())
}

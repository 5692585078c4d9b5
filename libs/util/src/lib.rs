use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

mod telemetry;

pub use telemetry::init_tracing;

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to locate workspace")?
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output)?.trim());
    let dir = cargo_path
        .parent()
        .context("workspace manifest has no parent directory")?;

    Ok(dir.to_path_buf())
}

/// Reads `config_name` from the workspace root into a typed config.
pub fn load_config<T: DeserializeOwned>(config_name: &str) -> anyhow::Result<T> {
    let config = std::fs::read_to_string(workspace_dir()?.join(config_name))
        .with_context(|| format!("failed to read {}", config_name))?;

    parse_config(&config)
        .with_context(|| format!("failed to parse {}", config_name))
}

pub fn parse_config<T: DeserializeOwned>(text: &str) -> anyhow::Result<T> {
    Ok(toml::from_str::<T>(text)?)
}

/// Reads a flat secrets file such as `Secrets.dev.toml`.
pub fn load_env(file_name: &str) -> anyhow::Result<Map<String, Value>> {
    let secrets = std::fs::read_to_string(workspace_dir()?.join(file_name))
        .with_context(|| format!("failed to read {}", file_name))?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .with_context(|| format!("failed to parse {}", file_name))
}

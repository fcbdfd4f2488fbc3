use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Name of the configuration file inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for the HBNB API server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// URL for the database connection
    pub database_url: String,
    /// Address the server binds to
    pub host: String,
    /// Port the server listens on
    pub port: u16,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Base URL the command line client talks to; unused by the server
    #[serde(default)]
    pub server_url: Option<String>,
}

/// Command line arguments for the server
#[derive(Parser, Debug, Default)]
#[clap(name = "hbnb", about = "Places and reviews REST API")]
pub struct CliArgs {
    /// Database URL
    #[clap(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Host to bind to
    #[clap(long, env = "HBNB_API_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[clap(long, env = "HBNB_API_PORT")]
    pub port: Option<u16>,

    /// Debug mode
    #[clap(long, env = "HBNB_DEBUG", default_value_t = false)]
    pub debug: bool,

    /// Emit logs as JSON lines
    #[clap(long, env = "HBNB_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            database_url: update.database_url.unwrap_or(self.database_url),
            host: update.host.unwrap_or(self.host),
            port: update.port.unwrap_or(self.port),
        }
    }

    /// The `host:port` string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Returns the base (default) configuration
///
/// When a config directory is known the database file lives inside it,
/// otherwise in the working directory.
pub fn base_config(config_path: Option<PathBuf>) -> Config {
    let database_url = config_path.map_or("hbnb.db".to_string(), |path| {
        path.join("hbnb.db").to_string_lossy().to_string()
    });

    Config {
        database_url,
        host: "0.0.0.0".to_string(),
        port: 5000,
    }
}

/// Loads configuration from a TOML file
///
/// A missing path or a file that does not exist yields an empty update.
///
/// ### Errors
///
/// Returns an error if the file exists but cannot be read or parsed
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file {:?}", config_path))?;
    let update = toml::from_str::<ConfigUpdate>(&content)
        .with_context(|| format!("Failed to parse config file {:?}", config_path))?;

    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        database_url: args.database_url,
        host: args.host,
        port: args.port,
        server_url: None,
    }
}

/// The platform configuration directory, if one can be determined
pub fn get_config_dir_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "hbnb", "hbnb") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            warn!("Could not determine config directory, skipping config file");
            None
        }
    }
}

/// Gets the complete configuration by combining defaults with
/// values from the config file, environment variables, and command line
/// arguments in order of increasing precedence
pub fn get_config(args: CliArgs) -> Config {
    let config_dir = get_config_dir_path().and_then(|path| {
        if !path.exists() {
            info!("Config path not found at {:?}, using defaults", path);
            None
        } else {
            Some(path)
        }
    });

    let file_update = match config_from_file(config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE_NAME))) {
        Ok(update) => update,
        Err(e) => {
            warn!("{:#}", e);
            ConfigUpdate::default()
        }
    };

    let config = base_config(config_dir)
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: database_url={}, bind_address={}",
        config.database_url,
        config.bind_address()
    );

    config
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod prop_tests;

//! Configuration for the gored server
//!
//! Values come from three layers, later ones winning: built-in defaults, a
//! configuration file (TOML, JSON or YAML, picked by extension), and explicit
//! command-line flags.
//!
//! # Example
//!
//! ```no_run
//! use gored::config::{Cli, Parser, ServerConfig};
//!
//! let config = ServerConfig::load(Cli::parse())?;
//! println!("Server address: {}", config.addr());
//! # Ok::<(), gored::config::ConfigError>(())
//! ```

use std::path::Path;

pub use clap::Parser;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Used when no `--config` is given and this file exists.
pub const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,

	#[error("Invalid configuration: {0}")]
	Invalid(String),

	#[error("Failed to apply log level: {0}")]
	LogLevel(#[from] telemetry::TelemetryError),
}

/// Command-line arguments for the server
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML, JSON, or YAML).
	/// Defaults to conf/config.toml if it exists.
	#[arg(short, long)]
	pub config: Option<String>,

	/// Port to listen on
	#[arg(short, long)]
	pub port: Option<u16>,

	/// Host to bind to
	#[arg(long)]
	pub host: Option<String>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Bytes read from a connection per read call
	#[arg(long)]
	pub read_buffer_size: Option<usize>,

	/// Acknowledge undecodable requests with +OK instead of a protocol error
	#[arg(long)]
	pub lenient_decode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub log_level: String,
	/// A request must arrive within a single read of this size.
	pub read_buffer_size: usize,
	/// Reply +OK to requests that fail to decode instead of -ERR.
	pub lenient_decode: bool,
	/// File the values were read from, re-read by [`ServerConfig::reload_log_level`].
	#[serde(skip)]
	pub config_file: Option<String>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".into(),
			port: 6380,
			log_level: "info".into(),
			read_buffer_size: 4096,
			lenient_decode: false,
			config_file: None,
		}
	}
}

impl ServerConfig {
	/// Build the effective configuration from parsed CLI arguments.
	pub fn load(args: Cli) -> Result<Self, ConfigError> {
		let config_file = args.config.or_else(|| {
			Path::new(DEFAULT_CONFIG_PATH)
				.exists()
				.then(|| DEFAULT_CONFIG_PATH.to_string())
		});
		let mut config = match config_file.as_deref() {
			Some(p) => load_from_file(p)?,
			None => ServerConfig::default(),
		};
		config.config_file = config_file;

		// Override with CLI arguments if explicitly provided
		if let Some(host) = args.host {
			config.host = host;
		}
		if let Some(port) = args.port {
			config.port = port;
		}
		if let Some(log_level) = args.log_level {
			config.log_level = log_level;
		}
		if let Some(size) = args.read_buffer_size {
			config.read_buffer_size = size;
		}
		if args.lenient_decode {
			config.lenient_decode = true;
		}

		config.validate()?;
		Ok(config)
	}

	pub fn addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	/// Re-read the configuration file and apply its `log_level` to the running
	/// logger. Returns the level now in effect.
	///
	/// Only the log level is picked up; every other value keeps what the
	/// server started with, and a `--log-level` flag no longer wins.
	pub fn reload_log_level(&self) -> Result<String, ConfigError> {
		let path = self
			.config_file
			.as_deref()
			.ok_or_else(|| ConfigError::Invalid("no configuration file to reload".into()))?;
		let fresh = load_from_file(path)?;
		telemetry::reload_log_level(&fresh.log_level)?;
		Ok(fresh.log_level)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.read_buffer_size == 0 {
			return Err(ConfigError::Invalid(
				"read_buffer_size must be greater than zero".into(),
			));
		}
		Ok(())
	}
}

fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ServerConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
	#[error("Invalid log level '{0}', expected one of: trace, debug, info, warn, error")]
	InvalidLogLevel(String),

	#[error("Logger is not initialized")]
	NotInitialized,

	#[error("Logger is already initialized")]
	AlreadyInitialized,

	#[error("Failed to reload log level: {0}")]
	ReloadFailed(String),
}

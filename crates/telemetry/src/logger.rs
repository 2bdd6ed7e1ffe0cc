use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TelemetryError;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Time formatter that renders "[YYYY-MM-DD HH:MM:SS.micros]" in local time
struct LocalMicrosTime;

impl FormatTime for LocalMicrosTime {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now: chrono::DateTime<chrono::Local> = std::time::SystemTime::now().into();
		write!(w, "{}", now.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

type ReloadHandle = reload::Handle<EnvFilter, Registry>;

static RELOAD_HANDLE: OnceLock<ReloadHandle> = OnceLock::new();

/// Normalize a level name, rejecting anything outside the five tracing levels.
fn validate_level(level: &str) -> Result<String, TelemetryError> {
	let lower = level.to_lowercase();
	if VALID_LEVELS.contains(&lower.as_str()) {
		Ok(lower)
	} else {
		Err(TelemetryError::InvalidLogLevel(level.to_string()))
	}
}

/// Install the global console logger at `level`.
///
/// Lines carry a local timestamp with microseconds, the thread id and the
/// event target. `RUST_LOG`-style directives are not read; the level comes
/// from configuration so it can be swapped later with [`reload_log_level`].
///
/// # Example
///
/// ```no_run
/// telemetry::init("info")?;
/// tracing::info!("server starting");
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
///
/// # Errors
///
/// Fails on an unknown level name or when a global subscriber is already set.
pub fn init(level: &str) -> Result<(), TelemetryError> {
	let level = validate_level(level)?;
	let (filter_layer, reload_handle) = reload::Layer::new(EnvFilter::new(&level));

	tracing_subscriber::registry()
		.with(filter_layer)
		.with(
			fmt::layer()
				.with_timer(LocalMicrosTime)
				.with_target(true)
				.with_thread_ids(true)
				.with_line_number(false)
				.with_file(false),
		)
		.try_init()
		.map_err(|_| TelemetryError::AlreadyInitialized)?;

	RELOAD_HANDLE
		.set(reload_handle)
		.map_err(|_| TelemetryError::AlreadyInitialized)
}

/// Swap the active log level without restarting.
///
/// Level names are case-insensitive.
///
/// ```no_run
/// # use telemetry::logger::reload_log_level;
/// reload_log_level("debug")?;
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
pub fn reload_log_level(level: &str) -> Result<(), TelemetryError> {
	let level = validate_level(level)?;
	let handle = RELOAD_HANDLE.get().ok_or(TelemetryError::NotInitialized)?;

	handle
		.reload(EnvFilter::new(&level))
		.map_err(|e| TelemetryError::ReloadFailed(e.to_string()))
}

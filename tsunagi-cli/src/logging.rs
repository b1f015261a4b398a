//! Logging initialisation for the tsunagi CLI.
//!
//! Installs a global `tracing` subscriber writing to stderr, in human or JSON
//! form, and bridges the `log` facade into it.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "TSUNAGI_LOG_FORMAT";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output format of diagnostic logs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per line, including the active span list.
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `TSUNAGI_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// `TSUNAGI_LOG_FORMAT` selects `human` (default) or `json` output and
/// `RUST_LOG` sets the filter, defaulting to `info`. Diagnostics go to
/// stderr so command output on stdout stays parseable.
///
/// # Errors
/// Returns [`LoggingError`] if the format variable is not valid Unicode or
/// names an unsupported format.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber() {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            report_existing_subscriber(&source);
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is owned by another subscriber, so report directly"
)]
fn report_existing_subscriber(source: &tracing_subscriber::util::TryInitError) {
    eprintln!("structured logging already configured elsewhere: {source}");
}

fn install_subscriber() -> Result<(), LoggingError> {
    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw)?,
        Err(env::VarError::NotPresent) => LogFormat::default(),
        Err(err @ env::VarError::NotUnicode(_)) => {
            return Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source: err,
            });
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Another logger may already own the `log` slot; keep it if so.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

/// Parses a `TSUNAGI_LOG_FORMAT` value, ignoring case and padding.
///
/// # Errors
/// Returns [`LoggingError::UnsupportedFormat`] for anything other than
/// `human` or `json`.
pub fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

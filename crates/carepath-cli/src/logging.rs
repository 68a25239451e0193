//! Logging setup for the `carepath` binary.
//!
//! # Log Levels
//!
//! - `error`: fatal command errors
//! - `warn`: summarizer failures and other degraded paths
//! - `info`: logins, logouts, demo scene changes, opened patients and records
//! - `debug`: journey transitions, timers, ignored actions
//!
//! Personal data (patient names, diagnoses) is written only with
//! `--log-data`; wrap such values in [`redact_value`].
//!
//! Pretty and compact output carry no wall-clock time because demo delays
//! run on the store's virtual clock. JSON lines keep the timestamp for log
//! files.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged instead of personal data.
pub const REDACTED_VALUE: &str = "[REDACTED]";

const CAREPATH_CRATES: [&str; 5] = [
    "carepath",
    "carepath_ai",
    "carepath_cli",
    "carepath_core",
    "carepath_model",
];

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// `value` when `--log-data` is on, [`REDACTED_VALUE`] otherwise.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for the carepath crates; other crates stay at warn.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace `level_filter` when it is set.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of stderr.
    pub log_file: Option<PathBuf>,
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(output_layer(config, writer))
        .init();
    Ok(())
}

/// Formatting layer for `config.format`, writing to `writer`.
pub fn output_layer<S>(config: &LogConfig, writer: BoxMakeWriter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = fmt::layer().with_writer(writer).with_target(false);
    match config.format {
        LogFormat::Json => layer
            .json()
            .with_ansi(false)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Compact => layer
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty => layer.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    CAREPATH_CRATES
        .iter()
        .fold(String::from("warn"), |directives, krate| {
            format!("{directives},{krate}={level}")
        })
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(default_directives(config.level_filter))
}

/// In-memory log sink for tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct LogCapture {
    buffer: std::sync::Arc<Mutex<Vec<u8>>>,
}

#[cfg(test)]
impl LogCapture {
    /// Run `body` with a debug-level subscriber writing into this capture.
    pub(crate) fn record<T>(&self, format: LogFormat, body: impl FnOnce() -> T) -> T {
        let sink = self.clone();
        let config = LogConfig {
            level_filter: LevelFilter::DEBUG,
            with_ansi: false,
            format,
            ..LogConfig::default()
        };
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new(default_directives(config.level_filter)))
            .with(output_layer(&config, BoxMakeWriter::new(move || sink.clone())));
        tracing::subscriber::with_default(subscriber, body)
    }

    pub(crate) fn contents(&self) -> String {
        let bytes = self.buffer.lock().map(|bytes| bytes.clone()).unwrap();
        String::from_utf8(bytes).unwrap()
    }
}

#[cfg(test)]
impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_cover_carepath_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("carepath_core=debug"));
        assert!(directives.contains("carepath_ai=debug"));
        assert_eq!(directives.matches(',').count(), CAREPATH_CRATES.len());
    }

    #[test]
    fn off_level_is_accepted() {
        let directives = default_directives(LevelFilter::OFF);
        assert!(directives.contains("carepath_cli=off"));
    }

    #[test]
    fn compact_lines_have_no_target_or_time() {
        let capture = LogCapture::default();
        capture.record(LogFormat::Compact, || {
            tracing::info!(scene = 3, "demo scene");
        });
        let output = capture.contents();
        assert!(output.trim_start().starts_with("INFO"), "{output}");
        assert!(output.contains("demo scene scene=3"), "{output}");
        assert!(!output.contains("carepath_cli::logging"), "{output}");
    }

    #[test]
    fn json_lines_carry_the_current_span() {
        let capture = LogCapture::default();
        capture.record(LogFormat::Json, || {
            let span = tracing::info_span!("step", index = 2);
            let _guard = span.enter();
            tracing::warn!("generation failed");
        });
        let line = capture.contents();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["level"], "WARN");
        assert_eq!(value["fields"]["message"], "generation failed");
        assert_eq!(value["span"]["index"], 2);
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn values_are_redacted_by_default() {
        assert_eq!(redact_value("陈桂芳"), REDACTED_VALUE);
    }
}

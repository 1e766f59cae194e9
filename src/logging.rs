//! Structured logging setup.
//!
//! The core emits `tracing` events at its decision points (identifier
//! resolution, failure classification, retry, final outcome); this module
//! only wires up a subscriber for binaries and tests that want formatted
//! output. Library consumers with their own subscriber skip it entirely.

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Most detailed debugging information.
    Trace,
    /// Detailed debugging information.
    Debug,
    /// Important business events.
    Info,
    /// Potential issues.
    Warn,
    /// Error information.
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable formatted output.
    Pretty,
    /// Compact format.
    Compact,
    /// JSON format for production environments.
    Json,
}

/// Log configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level.
    pub level: LogLevel,
    /// Log format.
    pub format: LogFormat,
    /// Whether to show the target module.
    pub show_target: bool,
    /// Whether to show span events (enter/close).
    pub show_span_events: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            show_target: true,
            show_span_events: false,
        }
    }
}

impl LogConfig {
    /// Configuration for development environments.
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            show_target: true,
            show_span_events: true,
        }
    }

    /// Configuration for production environments.
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            show_target: true,
            show_span_events: false,
        }
    }

    /// Configuration for test environments.
    pub fn test() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            show_target: false,
            show_span_events: false,
        }
    }
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("unifex={}", config.level)))
}

/// Initializes the logging system. Panics if a global subscriber is already
/// set; use [`try_init_logging`] where double initialization is possible.
pub fn init_logging(config: &LogConfig) {
    let span_events = if config.show_span_events {
        FmtSpan::ENTER | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter(config));
            tracing_subscriber::registry().with(fmt_layer).init();
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter(config));
            tracing_subscriber::registry().with(fmt_layer).init();
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter(config));
            tracing_subscriber::registry().with(fmt_layer).init();
        }
    }
}

/// Attempts to initialize the logging system, ignoring duplicate
/// initialization errors. Suitable for tests.
pub fn try_init_logging(config: &LogConfig) {
    let span_events = if config.show_span_events {
        FmtSpan::ENTER | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let result = match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter(config));
            tracing_subscriber::registry().with(fmt_layer).try_init()
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter(config));
            tracing_subscriber::registry().with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(config.show_target)
                .with_span_events(span_events)
                .with_filter(env_filter(config));
            tracing_subscriber::registry().with(fmt_layer).try_init()
        }
    };

    let _ = result;
}

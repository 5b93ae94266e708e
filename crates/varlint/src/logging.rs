use clap::ValueEnum;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Log to stderr, keeping stdout for diagnostics. `RUST_LOG` takes
/// precedence over `--log-level` when set.
pub fn init_logging(level: LogLevel, no_color: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("varlint={level},varlint_core={level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore the error raised when a subscriber is already set, e.g. when
    // `run()` is called several times in the same process.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color)
                .with_target(false)
                .with_line_number(false)
                .with_thread_names(false),
        )
        .with(filter)
        .try_init();
}

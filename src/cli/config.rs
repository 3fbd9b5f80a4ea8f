//! CLI Configuration

use std::path::PathBuf;

use clap::Args;

/// Log level used when the configured filter does not parse.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub(crate) log_format: LogFormat,
}

/// Catalog source settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogConfig {
    /// Directory of fixture files to load instead of the bundled catalog
    #[arg(long, env = "BANQUET_FIXTURES", global = true)]
    pub(crate) fixtures: Option<PathBuf>,
}

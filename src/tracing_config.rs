//! Log subscriber setup for the resolution core.
//!
//! The resolver crates only emit `tracing` events; whoever embeds them picks
//! the subscriber. [`init_tracing`] installs one from the environment:
//!
//! | Variable         | Meaning                                             |
//! |------------------|-----------------------------------------------------|
//! | `PHZ_LOG`        | Filter directives, `RUST_LOG` syntax. Wins over `RUST_LOG`. |
//! | `RUST_LOG`       | Fallback filter directives.                         |
//! | `PHZ_LOG_FORMAT` | `text` (default), `tree`, or `json`.                |
//!
//! ```bash
//! PHZ_LOG=phz_resolver=trace PHZ_LOG_FORMAT=tree cargo test --test end_to_end_tests
//! ```
//!
//! With neither filter variable set nothing is installed. Output is stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Output layout of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One flat line per event.
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Unrecognised names fall back to [`LogFormat::Text`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings, before anything is installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TracingConfig {
    directives: Option<String>,
    format: LogFormat,
}

impl TracingConfig {
    /// Read `PHZ_LOG`, `RUST_LOG` and `PHZ_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PHZ_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var("PHZ_LOG_FORMAT").ok(),
        )
    }

    /// Build from already-read variable values.
    #[must_use]
    pub fn from_vars(
        phz_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Self {
        Self {
            directives: phz_log.or(rust_log),
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn directives(&self) -> Option<&str> {
        self.directives.as_deref()
    }

    #[must_use]
    pub fn format(&self) -> LogFormat {
        self.format
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.directives.is_some()
    }

    /// The event filter. Malformed directives are skipped, not rejected.
    #[must_use]
    pub fn filter(&self) -> Option<EnvFilter> {
        self.directives
            .as_deref()
            .map(|directives| EnvFilter::builder().parse_lossy(directives))
    }

    /// Install as the global subscriber.
    ///
    /// `Ok(false)` when logging is disabled; an error when another global
    /// subscriber is already in place.
    pub fn try_install(&self) -> Result<bool, TryInitError> {
        let Some(filter) = self.filter() else {
            return Ok(false);
        };
        let registry = Registry::default().with(filter);
        match self.format {
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Tree => registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_indent_lines(true)
                        .with_targets(true),
                )
                .try_init(),
        }?;
        Ok(true)
    }
}

/// Install a subscriber from the environment, once per process.
///
/// Repeated calls, and calls after some other subscriber was installed, are
/// harmless.
pub fn init_tracing() {
    let config = TracingConfig::from_env();
    match config.try_install() {
        Ok(true) => tracing::debug!(format = ?config.format(), "tracing enabled"),
        Ok(false) => {}
        Err(err) => tracing::trace!(%err, "subscriber already installed"),
    }
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tests;

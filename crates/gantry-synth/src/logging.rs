//! Tracing subscriber installation, behind the `logging` feature.
//!
//! The engine itself only emits `tracing` events. Library consumers bring
//! their own subscriber; applications call [`init_logging`] or
//! [`init_logging_from_env`] once at startup.

use std::str::FromStr;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INSTALL: Once = Once::new();

/// Verbosity of synthesis log output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// The filter directive installed for this level.
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "off" | "silent" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("unknown log level `{other}`")),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.directive())
    }
}

/// Install a global subscriber logging at `level`.
///
/// A `RUST_LOG` environment filter still overrides the level. Safe to call
/// from multiple threads and more than once; only the first call installs
/// anything.
pub fn init_logging(level: LogLevel) {
    INSTALL.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.directive().parse().unwrap())
            .from_env_lossy();

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_target(false).without_time())
            .init();
    });
}

/// Install a global subscriber at the level named by `RUST_LOG`.
///
/// Falls back to [`LogLevel::Info`] when the variable is unset or does not
/// name a level.
pub fn init_logging_from_env() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default();
    init_logging(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_common_spellings() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Silent);
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn log_level_displays_its_directive() {
        assert_eq!(LogLevel::Silent.to_string(), "off");
        assert_eq!(LogLevel::default().to_string(), "info");
    }
}

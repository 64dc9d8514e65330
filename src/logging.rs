//! Logging setup for the `merkle-root` binary
//!
//! Logs always go to stderr so the root printed on stdout stays clean.
//! `RUST_LOG` takes precedence over the level chosen on the command line.

use tracing_subscriber::EnvFilter;

/// How much the CLI logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// `-q`: warnings only, no per-run summary
    Quiet,
    #[default]
    Info,
    /// `-v`: one line per reduction pass
    Debug,
    /// `-vv`: also every zero-padded node
    Trace,
}

impl LogLevel {
    /// Pick a level from the `-q` flag and the `-v` count. `-q` wins.
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Info,
            (false, 1) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    fn filter(&self) -> &'static str {
        match self {
            Self::Quiet => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn try_init(level: LogLevel) -> Result<(), String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, 0), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(false, 1), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(false, 2), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(false, 10), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(true, 0), LogLevel::Quiet);
        assert_eq!(LogLevel::from_flags(true, 2), LogLevel::Quiet);
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(LogLevel::Quiet.filter(), "warn");
        assert_eq!(LogLevel::default().filter(), "info");
        assert_eq!(LogLevel::Trace.filter(), "trace");
    }

    #[test]
    fn test_second_init_fails() {
        // Whichever call wins the global subscriber, the next one must fail
        let _ = try_init(LogLevel::Quiet);
        assert!(try_init(LogLevel::Quiet).is_err());
    }
}

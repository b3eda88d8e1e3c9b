//! Diagnostic logging to stderr.
//!
//! User-facing progress goes through [`crate::output::OutputFormatter`]; this
//! is for `-v` style tracing of scan and filesystem decisions.

use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over
/// `verbosity`. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}

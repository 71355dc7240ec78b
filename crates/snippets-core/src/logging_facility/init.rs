//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    fn default_directive(self, to_file: bool) -> &'static str {
        match (self, to_file) {
            (Profile::Production, _) => "snippets=info",
            (_, true) => "snippets=debug",
            (_, false) => "snippets=warn",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile, to_file: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directive(to_file)))
}

/// Initialize the logging facility writing to stderr
///
/// Stdout is reserved for command output, so every profile logs to stderr.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, `snippets=warn` unless `RUST_LOG` is set
/// - **Production**: JSON structured logs at info level
/// - **Test**: Registry only; see `init_test_capture()`
///
/// # Example
///
/// ```
/// use snippets_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile, false))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile, false))
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}

/// Initialize the logging facility appending to a log file
///
/// Defaults to debug level for the `snippets` crates.
///
/// # Errors
///
/// Returns the I/O error if the log file cannot be opened for appending.
pub fn init_with_file(profile: Profile, path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let writer = Mutex::new(file);

    INIT_ONCE.call_once(move || match profile {
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_env_filter(env_filter(profile, true))
                .init();
        }
        Profile::Development | Profile::Test => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_writer(writer)
                .with_env_filter(env_filter(profile, true))
                .init();
        }
    });

    Ok(())
}

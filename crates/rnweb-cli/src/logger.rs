//! Logging setup for the rnweb CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//!
//! # Features
//!
//! - **Verbosity control**: `--verbose` for debug, `--quiet` for errors only
//! - **Environment filters**: `RUST_LOG` when neither flag is given
//! - **Color support**: TTY detection with `NO_COLOR` / `FORCE_COLOR` and `--no-color`
//!
//! # Example
//!
//! ```rust,no_run
//! use rnweb_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("synthesizing configuration");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "rnweb_cli=debug,rnweb_bundler=debug,rnweb_config=debug,rnweb_resolve=debug";
const QUIET_FILTER: &str = "rnweb_cli=error,rnweb_bundler=error,rnweb_config=error,rnweb_resolve=error";
const DEFAULT_FILTER: &str = "rnweb_cli=info,rnweb_bundler=warn,rnweb_config=warn,rnweb_resolve=warn";

/// Pick the log filter from the global flags.
///
/// # Arguments
///
/// * `verbose` - Debug-level logging for every rnweb crate (overrides `quiet`)
/// * `quiet` - Only error-level logs
///
/// # Verbosity Levels
///
/// 1. `--verbose`: debug for every rnweb crate
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`, if set
/// 4. otherwise info for the CLI, warnings for the libraries
///
/// # Examples
///
/// ```rust
/// use rnweb_cli::logger::filter_for;
///
/// let filter = filter_for(true, false);
/// assert!(filter.to_string().contains("rnweb_resolve=debug"));
/// ```
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (overrides `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable ANSI colors in log lines
///
/// # Examples
///
/// ```rust,no_run
/// use rnweb_cli::logger::init_logger;
///
/// // Debug logging without colors
/// init_logger(true, false, true);
/// ```
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Install the global subscriber with a custom filter.
///
/// Used by [`init_logger`]; callers that build their own [`EnvFilter`]
/// (tests, embedding tools) can call it directly.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether stderr should get ANSI colors.
///
/// Checked in order:
///
/// 1. `NO_COLOR` set: no colors (<https://no-color.org>)
/// 2. `FORCE_COLOR` set: colors even without a TTY
/// 3. otherwise whatever the terminal on stderr supports
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn filters_parse() {
        let _ = EnvFilter::new(VERBOSE_FILTER);
        let _ = EnvFilter::new(QUIET_FILTER);
        let _ = EnvFilter::new(DEFAULT_FILTER);
    }

    #[test]
    fn verbose_wins_over_rust_log() {
        assert_eq!(filter_for(true, false).to_string(), EnvFilter::new(VERBOSE_FILTER).to_string());
    }

    #[test]
    #[serial]
    fn no_color_overrides_force_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_colors());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
        assert!(should_use_colors());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }
}

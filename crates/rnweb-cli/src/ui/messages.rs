use owo_colors::OwoColorize;

use super::colors_enabled;

/// Print a success message to stderr, prefixed with a green check mark.
///
/// # Examples
///
/// ```rust,no_run
/// use rnweb_cli::ui;
///
/// ui::success("Alias table built (27 entries)");
/// ```
pub fn success(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✓".green().bold(), message);
    } else {
        eprintln!("✓ {message}");
    }
}

/// Print an informational message to stderr.
pub fn info(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    } else {
        eprintln!("ℹ {message}");
    }
}

/// Print a warning to stderr.
///
/// Warnings never change the exit status; use them for problems the build
/// survives, such as a missing HTML template.
pub fn warning(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    } else {
        eprintln!("⚠ {message}");
    }
}

/// Print an error line to stderr.
///
/// The full diagnostic is rendered by miette when the command returns; this
/// line only marks where the command stopped.
pub fn error(message: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    } else {
        eprintln!("✗ {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }
}

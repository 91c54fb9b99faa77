//! Conversion of CLI errors into miette reports.

use miette::Report;

use crate::error::CliError;

/// Convert a [`CliError`] into a report for `main`.
///
/// Synthesis errors carry their own diagnostic code and help; everything
/// else is reported by message.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Bundler(e) => Report::new(e),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rnweb_resolve::ResolveError;

    #[test]
    fn bundler_errors_keep_their_code() {
        let err = CliError::Bundler(
            ResolveError::AliasCollision {
                name: "View".into(),
                existing: "./View".into(),
                incoming: "react-native-web/dist/cjs/exports/View".into(),
            }
            .into(),
        );
        let report = cli_error_to_miette(err);
        assert_eq!(report.code().unwrap().to_string(), "ALIAS_COLLISION");
    }

    #[test]
    fn other_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::InvalidArgument("bad".into()));
        assert!(report.to_string().contains("Invalid argument: bad"));
    }
}

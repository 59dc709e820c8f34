//! Terminal output for the command binaries.
//!
//! Everything goes to stderr: stdout of `stat-extract` carries the CSV
//! rows and the rewrite commands keep stdout empty.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green().for_stderr(), message)
}

/// Format a boundary warning with a yellow prefix.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow().for_stderr(), warning)
}

pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

pub fn display_success(message: &str) {
    eprintln!("{}", format_success(message));
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        let line = console::strip_ansi_codes(&format_error("cannot read pom.xml")).into_owned();
        assert_eq!(line, "ERROR: cannot read pom.xml");
    }

    #[test]
    fn test_format_success() {
        let line = console::strip_ansi_codes(&format_success("Rewrote 2 version tag(s)")).into_owned();
        assert_eq!(line, "✓ Rewrote 2 version tag(s)");
    }

    #[test]
    fn test_format_boundary_warning() {
        let warning = BoundaryWarning::SameVersion {
            version: "1.0.0".to_string(),
        };
        let line = console::strip_ansi_codes(&format_boundary_warning(&warning)).into_owned();
        assert_eq!(line, "⚠ WARNING: Old and new version are both '1.0.0'");
    }
}

use std::fmt;

use crate::domain::RewriteMode;

/// Non-fatal conditions met while extracting or rewriting.
/// These never change the exit status but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No anchored version tag was found, the file was left as is
    NoMatches { file: String, mode: RewriteMode },
    /// Old and new versions are identical, the rewrite is a no-op
    SameVersion { version: String },
    /// Both versions are semantic versions and the new one is lower
    VersionRegression { old: String, new: String },
    /// The report did not contain a single download record
    EmptyReport { file: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoMatches { file, mode } => {
                write!(
                    f,
                    "No {}-anchored snapshot version found in '{}', file left unchanged",
                    mode, file
                )
            }
            BoundaryWarning::SameVersion { version } => {
                write!(f, "Old and new version are both '{}'", version)
            }
            BoundaryWarning::VersionRegression { old, new } => {
                write!(f, "New version '{}' is lower than old version '{}'", new, old)
            }
            BoundaryWarning::EmptyReport { file } => {
                write!(f, "No download records found in '{}'", file)
            }
        }
    }
}

/// Inspects a requested version bump before it is applied.
///
/// Versions that are not semantic versions are accepted silently, since
/// matching is always literal.
pub fn check_bump(old_version: &str, new_version: &str) -> Option<BoundaryWarning> {
    if old_version == new_version {
        return Some(BoundaryWarning::SameVersion {
            version: old_version.to_string(),
        });
    }

    let old = semver::Version::parse(old_version).ok()?;
    let new = semver::Version::parse(new_version).ok()?;
    if new < old {
        Some(BoundaryWarning::VersionRegression {
            old: old_version.to_string(),
            new: new_version.to_string(),
        })
    } else {
        None
    }
}

//! Anchor-scoped version rewriting for Maven POM files
//!
//! A version bump must only touch the `<version>` tags that belong to the
//! project itself. The same snapshot string also shows up in dependency
//! declarations, so every substitution is tied to an [`Anchor`]: text that
//! has to precede or follow the tag. The rewrite is purely textual; the
//! document is never parsed and bytes outside the replaced tags are kept.

use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::config::RewriteConfig;
use crate::domain::{Anchor, RewriteMode, VersionTag};
use crate::error::Result;

/// Result of a rewrite: the new text and the replacements made per anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub text: String,
    pub replacements: Vec<(Anchor, usize)>,
}

impl RewriteOutcome {
    /// Total number of tags rewritten across all anchors
    pub fn total(&self) -> usize {
        self.replacements.iter().map(|(_, count)| count).sum()
    }
}

/// Rewrites snapshot versions in POM text
#[derive(Debug, Clone)]
pub struct PomRewriter {
    config: RewriteConfig,
}

impl PomRewriter {
    /// Create a new rewriter
    pub fn new(config: RewriteConfig) -> Self {
        PomRewriter { config }
    }

    /// Replaces `old` with `new` in every snapshot version tag carrying one
    /// of the anchors of `mode`.
    ///
    /// Anchors are applied one after the other on the running text. Text
    /// without any anchored tag comes back unchanged.
    pub fn rewrite(
        &self,
        text: &str,
        old_version: &str,
        new_version: &str,
        mode: RewriteMode,
    ) -> Result<RewriteOutcome> {
        let old_tag = VersionTag::new(old_version, &self.config.snapshot_suffix);
        let new_tag = VersionTag::new(new_version, &self.config.snapshot_suffix).to_string();

        let mut current = text.to_string();
        let mut replacements = Vec::with_capacity(mode.anchors().len());

        for &anchor in mode.anchors() {
            let pattern = Regex::new(&format!(
                "(?P<lead>{}){}(?P<trail>{})",
                anchor.lead(&self.config.product_prefix),
                old_tag.pattern(),
                anchor.trail()
            ))?;

            let mut count = 0;
            let rewritten = pattern.replace_all(&current, |caps: &Captures<'_>| {
                count += 1;
                format!("{}{}{}", &caps["lead"], new_tag, &caps["trail"])
            });
            let rewritten = rewritten.into_owned();

            log::debug!("{} anchor: {} tag(s) rewritten", anchor, count);
            replacements.push((anchor, count));
            current = rewritten;
        }

        Ok(RewriteOutcome {
            text: current,
            replacements,
        })
    }

    /// Rewrites `path` in place.
    ///
    /// The file is read once and written back once; the write is skipped
    /// when no tag matched.
    pub fn rewrite_file(
        &self,
        path: &Path,
        old_version: &str,
        new_version: &str,
        mode: RewriteMode,
    ) -> Result<RewriteOutcome> {
        let content = fs::read_to_string(path)?;
        let outcome = self.rewrite(&content, old_version, new_version, mode)?;

        if outcome.text != content {
            fs::write(path, &outcome.text)?;
            log::info!(
                "{}: {} version tag(s) rewritten",
                path.display(),
                outcome.total()
            );
        } else {
            log::info!("{}: unchanged", path.display());
        }

        Ok(outcome)
    }
}

impl Default for PomRewriter {
    fn default() -> Self {
        PomRewriter::new(RewriteConfig::default())
    }
}

/// Rewrites the parent reference version of a module POM.
pub fn rewrite_parent_pom(text: &str, old_version: &str, new_version: &str) -> Result<String> {
    PomRewriter::default()
        .rewrite(text, old_version, new_version, RewriteMode::Parent)
        .map(|outcome| outcome.text)
}

/// Rewrites the product artifact versions of the root POM.
pub fn rewrite_root_pom(text: &str, old_version: &str, new_version: &str) -> Result<String> {
    PomRewriter::default()
        .rewrite(text, old_version, new_version, RewriteMode::Root)
        .map(|outcome| outcome.text)
}

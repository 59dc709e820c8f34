use std::fmt;

/// One line break followed by indentation, as found between a version tag
/// and the closing tag on the next line.
const NEXT_LINE: &str = r"\r?\n[ \t]*";

/// Context that must surround a version tag for it to be rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Tag is followed on the next line by `</parent>`
    ClosingParent,
    /// Tag is preceded by an `<artifactId>` starting with the product prefix
    ProductArtifactId,
    /// Tag is followed on the next line by `</artifact>`
    ClosingArtifact,
}

impl Anchor {
    /// Regex fragment that must precede the version tag.
    pub fn lead(&self, product_prefix: &str) -> String {
        match self {
            Anchor::ProductArtifactId => format!(
                r"<artifactId>{}[^<]*</artifactId>\s*",
                regex::escape(product_prefix)
            ),
            Anchor::ClosingParent | Anchor::ClosingArtifact => String::new(),
        }
    }

    /// Regex fragment that must follow the version tag.
    pub fn trail(&self) -> String {
        match self {
            Anchor::ClosingParent => format!("{}</parent>", NEXT_LINE),
            Anchor::ClosingArtifact => format!("{}</artifact>", NEXT_LINE),
            Anchor::ProductArtifactId => String::new(),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Anchor::ClosingParent => "</parent>",
            Anchor::ProductArtifactId => "<artifactId>",
            Anchor::ClosingArtifact => "</artifact>",
        };
        write!(f, "{}", name)
    }
}

/// Which set of anchors a rewrite applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Module POMs: only the parent reference is bumped
    Parent,
    /// Root POM: product artifacts and `</artifact>` entries are bumped
    Root,
}

impl RewriteMode {
    /// Anchors applied by this mode, in application order.
    pub fn anchors(&self) -> &'static [Anchor] {
        match self {
            RewriteMode::Parent => &[Anchor::ClosingParent],
            RewriteMode::Root => &[Anchor::ProductArtifactId, Anchor::ClosingArtifact],
        }
    }
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteMode::Parent => write!(f, "parent"),
            RewriteMode::Root => write!(f, "root"),
        }
    }
}

/// A `<version>…</version>` tag carrying a snapshot version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub version: String,
    pub suffix: String,
}

impl VersionTag {
    /// Create a new version tag
    pub fn new(version: impl Into<String>, suffix: impl Into<String>) -> Self {
        VersionTag {
            version: version.into(),
            suffix: suffix.into(),
        }
    }

    /// Regex matching this tag literally
    pub fn pattern(&self) -> String {
        regex::escape(&self.to_string())
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<version>{}{}</version>", self.version, self.suffix)
    }
}

//! Domain value objects: TemplateKind, License, ProjectType, RepoRef.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. This
//! file defines the types, their string representations, and their `FromStr`
//! parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. For templates, add a definition in the adapters' built-in store

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateKind ──────────────────────────────────────────────────────────────

/// Identifier of one of the built-in README templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Minimal,
    #[default]
    Standard,
    Fancy,
}

impl TemplateKind {
    /// All kinds, in display order.
    pub const ALL: [TemplateKind; 3] = [Self::Minimal, Self::Standard, Self::Fancy];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Fancy => "fancy",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "fancy" => Ok(Self::Fancy),
            _ => Err(DomainError::TemplateNotFound(s.to_string())),
        }
    }
}

// ── License ───────────────────────────────────────────────────────────────────

/// License choices offered by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum License {
    #[default]
    Mit,
    Apache2,
    Gpl3,
    Bsd3,
    /// Explicitly no license.
    Unlicensed,
}

impl License {
    pub const ALL: [License; 5] = [
        Self::Mit,
        Self::Apache2,
        Self::Gpl3,
        Self::Bsd3,
        Self::Unlicensed,
    ];

    /// Canonical lowercase identifier (used by flags and config).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "mit",
            Self::Apache2 => "apache-2.0",
            Self::Gpl3 => "gpl-3.0",
            Self::Bsd3 => "bsd-3-clause",
            Self::Unlicensed => "none",
        }
    }

    /// Human-readable name as it appears in the README.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache 2.0",
            Self::Gpl3 => "GPL 3.0",
            Self::Bsd3 => "BSD 3-Clause",
            Self::Unlicensed => "None",
        }
    }

    /// SPDX identifier, if the license has one.
    pub const fn spdx_id(&self) -> Option<&'static str> {
        match self {
            Self::Mit => Some("MIT"),
            Self::Apache2 => Some("Apache-2.0"),
            Self::Gpl3 => Some("GPL-3.0"),
            Self::Bsd3 => Some("BSD-3-Clause"),
            Self::Unlicensed => None,
        }
    }

    /// Map an SPDX id (as reported by GitHub or a manifest) to a license.
    ///
    /// Only the identifiers this tool knows about are recognised; anything
    /// else yields `None`.
    pub fn from_spdx(id: &str) -> Option<Self> {
        match id.trim().to_ascii_uppercase().as_str() {
            "MIT" => Some(Self::Mit),
            "APACHE-2.0" => Some(Self::Apache2),
            "GPL-3.0" | "GPL-3.0-ONLY" | "GPL-3.0-OR-LATER" => Some(Self::Gpl3),
            "BSD-3-CLAUSE" => Some(Self::Bsd3),
            _ => None,
        }
    }

    /// Markdown shields.io badge, empty for [`License::Unlicensed`].
    pub fn badge(&self) -> String {
        let (label, color, url) = match self {
            Self::Mit => ("MIT", "yellow", "https://opensource.org/licenses/MIT"),
            Self::Apache2 => (
                "Apache_2.0",
                "blue",
                "https://opensource.org/licenses/Apache-2.0",
            ),
            Self::Gpl3 => ("GPL_v3", "blue", "https://www.gnu.org/licenses/gpl-3.0"),
            Self::Bsd3 => (
                "BSD_3--Clause",
                "orange",
                "https://opensource.org/licenses/BSD-3-Clause",
            ),
            Self::Unlicensed => return String::new(),
        };
        format!(
            "[![License: {}](https://img.shields.io/badge/License-{}-{}.svg)]({})",
            self.display_name(),
            label,
            color,
            url
        )
    }

    /// Sentence used in the README's license section.
    pub fn notice(&self) -> String {
        match self {
            Self::Unlicensed => "No license has been chosen for this project yet.".into(),
            other => format!(
                "This project is licensed under the {} License. See the LICENSE file for details.",
                other.display_name()
            ),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "apache" | "apache2" | "apache-2.0" | "apache 2.0" => Ok(Self::Apache2),
            "gpl" | "gpl3" | "gpl-3.0" | "gpl 3.0" => Ok(Self::Gpl3),
            "bsd" | "bsd3" | "bsd-3-clause" | "bsd 3-clause" => Ok(Self::Bsd3),
            "none" | "unlicensed" => Ok(Self::Unlicensed),
            _ => Err(DomainError::UnknownLicense(s.to_string())),
        }
    }
}

// ── ProjectType ───────────────────────────────────────────────────────────────

/// Ecosystem of the project being documented, detected from marker files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Python,
    JavaScript,
    Rust,
    Go,
    Java,
    #[default]
    Generic,
}

impl ProjectType {
    /// Marker files checked in priority order. The first hit wins.
    pub const MARKERS: &'static [(&'static str, ProjectType)] = &[
        ("Cargo.toml", Self::Rust),
        ("package.json", Self::JavaScript),
        ("pyproject.toml", Self::Python),
        ("requirements.txt", Self::Python),
        ("setup.py", Self::Python),
        ("go.mod", Self::Go),
        ("pom.xml", Self::Java),
        ("build.gradle", Self::Java),
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Java => "java",
            Self::Generic => "generic",
        }
    }

    /// Installation instructions as a fenced markdown block.
    pub fn install_instructions(&self, project_name: &str) -> String {
        let commands = match self {
            Self::Python => "pip install -e .".to_string(),
            Self::JavaScript => "npm install".to_string(),
            Self::Rust => "cargo build --release".to_string(),
            Self::Go => "go build ./...".to_string(),
            Self::Java => "mvn package".to_string(),
            Self::Generic => {
                return format!(
                    "Clone the repository and follow the setup steps for {}.",
                    project_name
                );
            }
        };
        format!("```bash\n{}\n```", commands)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RepoRef ───────────────────────────────────────────────────────────────────

/// A GitHub repository reference in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef {
    owner: String,
    name: String,
}

impl RepoRef {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Browser URL of the repository.
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    /// Parse a git remote URL such as `git@github.com:owner/name.git` or
    /// `https://github.com/owner/name`. Non-GitHub remotes yield `None`.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();
        let path = url
            .strip_prefix("git@github.com:")
            .or_else(|| url.strip_prefix("ssh://git@github.com/"))
            .or_else(|| url.strip_prefix("https://github.com/"))
            .or_else(|| url.strip_prefix("http://github.com/"))?;
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        path.parse().ok()
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidRepository {
            reference: s.to_string(),
            reason: reason.to_string(),
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(|| invalid("missing '/'"))?;
        let valid_part = |p: &str| {
            !p.is_empty()
                && p
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        };
        if !valid_part(owner) || !valid_part(name) {
            return Err(invalid("owner and name must be non-empty identifiers"));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

//! Project probe: smart defaults from the working directory.
//!
//! Reads whatever is cheap to read (package manifests, the `LICENSE` file, an
//! existing `README.md` and `.git/config`) and turns it into
//! [`ProjectHints`]. Nothing here fails: a missing or unparsable file just
//! contributes nothing.

use std::fs;
use std::path::Path;

use readmegen_core::{
    application::ports::ProjectInspector,
    domain::{License, ProjectHints, ProjectType, RepoRef, parse_feature_list},
};
use serde::Deserialize;
use tracing::{debug, instrument};

const LICENSE_FILES: [&str; 4] = ["LICENSE", "LICENSE.md", "LICENSE.txt", "COPYING"];
const README_FILES: [&str; 2] = ["README.md", "readme.md"];

/// [`ProjectInspector`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProjectProbe;

impl LocalProjectProbe {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectInspector for LocalProjectProbe {
    #[instrument(skip_all, fields(root = %root.display()))]
    fn inspect(&self, root: &Path) -> ProjectHints {
        let project_type = detect_project_type(root);
        let mut hints = ProjectHints {
            project_type,
            ..ProjectHints::default()
        };

        match project_type {
            ProjectType::Rust => read_cargo_manifest(root, &mut hints),
            ProjectType::JavaScript => read_package_json(root, &mut hints),
            ProjectType::Python => read_pyproject(root, &mut hints),
            _ => {}
        }

        if hints.license.is_none() {
            hints.license = read_license_file(root);
        }
        hints.features = read_existing_features(root);
        if hints.repository.is_none() {
            hints.repository = read_git_origin(root);
        }

        debug!(?hints, "Project inspected");
        hints
    }
}

/// First marker file present wins; see [`ProjectType::MARKERS`].
pub fn detect_project_type(root: &Path) -> ProjectType {
    ProjectType::MARKERS
        .iter()
        .find(|(marker, _)| root.join(marker).is_file())
        .map(|(_, kind)| *kind)
        .unwrap_or_default()
}

fn read(root: &Path, name: &str) -> Option<String> {
    fs::read_to_string(root.join(name)).ok()
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// First known license in an SPDX expression such as `MIT OR Apache-2.0`.
fn license_from_expression(expr: &str) -> Option<License> {
    expr.split(|c: char| c.is_whitespace() || matches!(c, '/' | '(' | ')'))
        .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("or") && !t.eq_ignore_ascii_case("and"))
        .find_map(License::from_spdx)
}

// ── Cargo.toml ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    description: Option<String>,
    license: Option<String>,
    repository: Option<String>,
}

fn read_cargo_manifest(root: &Path, hints: &mut ProjectHints) {
    let Some(raw) = read(root, "Cargo.toml") else {
        return;
    };
    let package = match toml::from_str::<CargoManifest>(&raw) {
        Ok(manifest) => manifest.package,
        Err(e) => {
            debug!(error = %e, "Ignoring unparsable Cargo.toml");
            return;
        }
    };
    let Some(package) = package else { return };

    hints.description = non_blank(package.description);
    hints.license = package.license.as_deref().and_then(license_from_expression);
    hints.repository = package
        .repository
        .as_deref()
        .and_then(RepoRef::from_remote_url);
}

// ── package.json ─────────────────────────────────────────────────────────────

fn read_package_json(root: &Path, hints: &mut ProjectHints) {
    let Some(raw) = read(root, "package.json") else {
        return;
    };
    let json: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "Ignoring unparsable package.json");
            return;
        }
    };

    hints.description = non_blank(json["description"].as_str().map(String::from));
    hints.license = json["license"].as_str().and_then(license_from_expression);

    // "repository" is either a URL string or { "type": "git", "url": "..." }
    let repo_url = json["repository"]
        .as_str()
        .or_else(|| json["repository"]["url"].as_str());
    hints.repository = repo_url
        .map(|url| url.trim_start_matches("git+"))
        .and_then(|url| {
            url.strip_prefix("github:")
                .and_then(|r| r.parse().ok())
                .or_else(|| RepoRef::from_remote_url(url))
        });
}

// ── pyproject.toml ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<PyProjectTable>,
}

#[derive(Debug, Deserialize)]
struct PyProjectTable {
    description: Option<String>,
    license: Option<PyLicense>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PyLicense {
    Expression(String),
    Table { text: Option<String> },
}

fn read_pyproject(root: &Path, hints: &mut ProjectHints) {
    let Some(raw) = read(root, "pyproject.toml") else {
        return;
    };
    let project = match toml::from_str::<PyProject>(&raw) {
        Ok(p) => p.project,
        Err(e) => {
            debug!(error = %e, "Ignoring unparsable pyproject.toml");
            return;
        }
    };
    let Some(project) = project else { return };

    hints.description = non_blank(project.description);
    hints.license = match project.license {
        Some(PyLicense::Expression(expr)) => license_from_expression(&expr),
        Some(PyLicense::Table { text: Some(text) }) => license_from_expression(&text),
        _ => None,
    };
}

// ── Other files ──────────────────────────────────────────────────────────────

fn read_license_file(root: &Path) -> Option<License> {
    let text = LICENSE_FILES.iter().find_map(|name| read(root, name))?;
    let head: String = text.lines().take(5).collect::<Vec<_>>().join(" ");
    let head = head.to_ascii_uppercase();

    if head.contains("MIT LICENSE") {
        Some(License::Mit)
    } else if head.contains("APACHE LICENSE") {
        Some(License::Apache2)
    } else if head.contains("GNU GENERAL PUBLIC LICENSE") && head.contains("VERSION 3") {
        Some(License::Gpl3)
    } else if head.contains("BSD 3-CLAUSE") {
        Some(License::Bsd3)
    } else {
        None
    }
}

fn read_existing_features(root: &Path) -> Vec<String> {
    README_FILES
        .iter()
        .find_map(|name| read(root, name))
        .map(|text| parse_feature_list(&text))
        .unwrap_or_default()
}

/// `url` of the `[remote "origin"]` section in `.git/config`.
fn read_git_origin(root: &Path) -> Option<RepoRef> {
    let config = read(root, ".git/config")?;
    let mut in_origin = false;

    for line in config.lines().map(str::trim) {
        if line.starts_with('[') {
            in_origin = line == r#"[remote "origin"]"#;
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return RepoRef::from_remote_url(value.trim());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use readmegen_core::domain::TemplateKind;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn empty_directory_yields_defaults() {
        let dir = TempDir::new().unwrap();

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints, ProjectHints::default());
        assert_eq!(hints.suggested_template(), TemplateKind::Standard);
    }

    #[test]
    fn marker_priority() {
        let dir = TempDir::new().unwrap();
        write(&dir, "requirements.txt", "requests\n");
        assert_eq!(detect_project_type(dir.path()), ProjectType::Python);

        write(&dir, "package.json", "{}");
        assert_eq!(detect_project_type(dir.path()), ProjectType::JavaScript);

        write(&dir, "Cargo.toml", "[package]\nname = \"x\"\n");
        assert_eq!(detect_project_type(dir.path()), ProjectType::Rust);
    }

    #[test]
    fn reads_cargo_manifest() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "Cargo.toml",
            r#"
[package]
name = "demo"
description = "A demo crate"
license = "MIT OR Apache-2.0"
repository = "https://github.com/acme/demo"
"#,
        );

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints.project_type, ProjectType::Rust);
        assert_eq!(hints.description.as_deref(), Some("A demo crate"));
        assert_eq!(hints.license, Some(License::Mit));
        assert_eq!(hints.repository.unwrap().to_string(), "acme/demo");
    }

    #[test]
    fn reads_package_json_repository_object() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "package.json",
            r#"{
  "name": "demo",
  "description": "  ",
  "license": "BSD-3-Clause",
  "repository": { "type": "git", "url": "git+https://github.com/acme/web.git" }
}"#,
        );

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints.description, None);
        assert_eq!(hints.license, Some(License::Bsd3));
        assert_eq!(hints.repository.unwrap().to_string(), "acme/web");
    }

    #[test]
    fn reads_pyproject_license_table() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "pyproject.toml",
            "[project]\nname = \"demo\"\ndescription = \"Py demo\"\nlicense = { text = \"GPL-3.0-or-later\" }\n",
        );

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints.project_type, ProjectType::Python);
        assert_eq!(hints.description.as_deref(), Some("Py demo"));
        assert_eq!(hints.license, Some(License::Gpl3));
    }

    #[test]
    fn broken_manifest_is_ignored() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Cargo.toml", "this is not [ toml");

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints.project_type, ProjectType::Rust);
        assert_eq!(hints.description, None);
    }

    #[test]
    fn license_file_and_git_origin() {
        let dir = TempDir::new().unwrap();
        write(&dir, "LICENSE", "MIT License\n\nCopyright (c) 2026 Someone\n");
        write(
            &dir,
            ".git/config",
            "[core]\n\tbare = false\n[remote \"upstream\"]\n\turl = git@github.com:other/fork.git\n[remote \"origin\"]\n\turl = git@github.com:acme/tool.git\n",
        );

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints.license, Some(License::Mit));
        assert_eq!(hints.repository.unwrap().to_string(), "acme/tool");
    }

    #[test]
    fn reuses_features_from_existing_readme() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "README.md",
            "# Tool\n\n## Features\n\n- Fast\n- Small\n\n## License\n\nMIT\n",
        );

        let hints = LocalProjectProbe::new().inspect(dir.path());

        assert_eq!(hints.features, vec!["Fast", "Small"]);
        assert_eq!(hints.suggested_template(), TemplateKind::Standard);
    }
}

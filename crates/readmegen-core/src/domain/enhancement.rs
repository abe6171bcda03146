//! Data returned by enhancers and the rules for merging it into metadata.
//!
//! Every sub-field is merged on its own. A blank or unrecognised value is
//! dropped without affecting the others, so a partially useful response
//! still contributes what it can.
//!
//! | Field                  | Rule                                                    |
//! |------------------------|---------------------------------------------------------|
//! | `description`          | replaces the description when non-blank                 |
//! | `fallback_description` | used only while the description is the default         |
//! | `features`             | appended after existing ones, case-insensitive dedupe   |
//! | `license_spdx`         | used only when no license was chosen and id is known    |
//! | `repository_url`       | set when it is an http(s) URL                           |
//! | `contributors`         | set when at least one non-blank login remains           |

use crate::domain::{
    entities::ProjectMetadata, markdown::normalize_feature, value_objects::License,
};

/// Suggested changes from one enhancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enhancement {
    pub description: Option<String>,
    pub fallback_description: Option<String>,
    pub features: Vec<String>,
    pub license_spdx: Option<String>,
    pub repository_url: Option<String>,
    pub contributors: Vec<String>,
}

impl Enhancement {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `metadata`, returning the new record and the names of the
    /// fields that changed.
    pub fn apply(&self, metadata: &ProjectMetadata) -> (ProjectMetadata, Vec<&'static str>) {
        let mut out = metadata.clone();
        let mut applied = Vec::new();

        if let Some(desc) = non_blank(self.description.as_deref()) {
            out.description = desc.to_string();
            applied.push("description");
        } else if let Some(desc) = non_blank(self.fallback_description.as_deref()) {
            if out.has_default_description() {
                out.description = desc.to_string();
                applied.push("description");
            }
        }

        let before = out.features.len();
        for feature in &self.features {
            let feature = normalize_feature(feature);
            if feature.is_empty() {
                continue;
            }
            if !out.features.iter().any(|f| f.eq_ignore_ascii_case(&feature)) {
                out.features.push(feature);
            }
        }
        if out.features.len() > before {
            applied.push("features");
        }

        if out.license.is_none() {
            if let Some(license) = self.license_spdx.as_deref().and_then(License::from_spdx) {
                out.license = Some(license);
                applied.push("license");
            }
        }

        if let Some(url) = non_blank(self.repository_url.as_deref()) {
            if url.starts_with("https://") || url.starts_with("http://") {
                out.repository_url = Some(url.to_string());
                applied.push("repository_url");
            }
        }

        let mut contributors: Vec<String> = Vec::new();
        for login in &self.contributors {
            let login = login.trim();
            if !login.is_empty() && !contributors.iter().any(|c| c == login) {
                contributors.push(login.to_string());
            }
        }
        if !contributors.is_empty() {
            out.contributors = contributors;
            applied.push("contributors");
        }

        (out, applied)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

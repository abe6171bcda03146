//! Markdown helpers for the feature list section.
//!
//! [`render_feature_list`] and [`parse_feature_list`] are inverses for
//! single-line features: parsing a rendered README recovers the ordered list
//! that was rendered into it.

/// Line rendered when a project has no features.
pub const NO_FEATURES: &str = "_No features listed yet._";

/// A feature as stored and rendered: trimmed, with every run of whitespace
/// (line breaks included) folded into one space.
pub fn normalize_feature(feature: &str) -> String {
    feature.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One `- item` line per feature, in insertion order.
pub fn render_feature_list(features: &[String]) -> String {
    if features.is_empty() {
        return NO_FEATURES.to_string();
    }
    features
        .iter()
        .map(|f| format!("- {}", normalize_feature(f)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Recover the feature list from a README.
///
/// Finds the first second-level (or deeper) heading whose text contains
/// "features" (any case), so a project titled "Features" is not mistaken for
/// the section, and collects the `- ` / `* ` items below it up to the next
/// heading.
pub fn parse_feature_list(markdown: &str) -> Vec<String> {
    let mut in_section = false;
    let mut features = Vec::new();

    for line in markdown.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            if in_section {
                break;
            }
            in_section =
                trimmed.starts_with("##") && trimmed.to_lowercase().contains("features");
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let item = normalize_feature(item);
            if !item.is_empty() {
                features.push(item);
            }
        }
    }

    features
}

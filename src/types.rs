//! Shared types passed from the scan stage to the renderer.

use std::time::SystemTime;

/// One qualifying image in the image folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Filename as listed, e.g. `001-dawn.jpg`.
    pub filename: String,
    /// Filename without extension, unmodified.
    pub stem: String,
    /// Cleaned name for `alt` text and console listings.
    pub display_name: String,
    /// `<folder>/<filename>`, used verbatim in `src` attributes and the lightbox array.
    pub path: String,
    /// Filesystem modification time.
    pub modified: SystemTime,
}

/// Title and description of a project page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub title: String,
    /// Text file contents, verbatim.
    pub description: String,
    /// Text file the metadata came from; `None` when defaults were used.
    pub source: Option<String>,
}

/// A footer link to a social platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    /// Link target, `#` when not configured.
    pub href: String,
}

impl SocialLink {
    pub fn placeholder(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: "#".to_string(),
        }
    }
}

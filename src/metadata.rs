//! Text-file metadata: project descriptions and social links.
//!
//! ## Project text
//!
//! A project folder holds one plain `.txt` file next to its images. Its name
//! becomes the page title (`lamp_study.txt` → "LAMP STUDY") and its contents
//! the description, kept verbatim so line breaks survive into the page
//! (rendered with `white-space: pre-wrap`). Without a text file the
//! configured defaults are used.
//!
//! ## Social links
//!
//! Each platform has a fixed one-line file in the social directory holding
//! its URL. Missing or blank files yield a `#` placeholder link, never an error.
//!
//! Files that exist but cannot be read (permissions, invalid UTF-8) are
//! errors: they propagate to the caller instead of silently falling back.

use crate::config::PageConfig;
use crate::naming;
use crate::types::{ProjectMetadata, SocialLink};
use std::io;
use std::path::Path;

/// Platforms linked from the index footer, with the file holding each URL.
pub const SOCIAL_PLATFORMS: &[(&str, &str)] = &[
    ("Instagram", "instagram.txt"),
    ("LinkedIn", "linkedin.txt"),
    ("Hackaday", "hackaday.txt"),
];

/// Placeholder links in the project page footer.
pub const PROJECT_FOOTER_LINKS: &[&str] = &["Instagram", "LinkedIn", "Behance"];

/// Build project metadata from the folder's text file, if any.
pub fn project_metadata(
    text_file: Option<&Path>,
    defaults: &PageConfig,
) -> io::Result<ProjectMetadata> {
    let Some(path) = text_file else {
        return Ok(ProjectMetadata {
            title: defaults.default_title.clone(),
            description: defaults.default_description.clone(),
            source: None,
        });
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let description = std::fs::read_to_string(path)?;

    Ok(ProjectMetadata {
        title: naming::project_title(&filename),
        description,
        source: Some(filename),
    })
}

/// Read a single social link file.
///
/// Returns `#` if the file is missing or blank, the trimmed URL otherwise.
pub fn read_social_link(path: &Path) -> io::Result<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };
    Ok(content
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map_or_else(|| "#".to_string(), String::from))
}

/// Read every platform in [`SOCIAL_PLATFORMS`] from `dir`.
pub fn read_social_links(dir: &Path) -> io::Result<Vec<SocialLink>> {
    SOCIAL_PLATFORMS
        .iter()
        .map(|(label, file)| {
            Ok(SocialLink {
                label: label.to_string(),
                href: read_social_link(&dir.join(file))?,
            })
        })
        .collect()
}

/// Footer links for project pages: fixed labels, all placeholders.
pub fn project_footer_links() -> Vec<SocialLink> {
    PROJECT_FOOTER_LINKS
        .iter()
        .map(|label| SocialLink::placeholder(label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn project_metadata_from_text_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("My Project.txt");
        fs::write(&path, "Hello").unwrap();

        let meta = project_metadata(Some(&path), &PageConfig::default()).unwrap();
        assert_eq!(meta.title, "MY PROJECT");
        assert_eq!(meta.description, "Hello");
        assert_eq!(meta.source.as_deref(), Some("My Project.txt"));
    }

    #[test]
    fn project_description_kept_verbatim() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lamp.txt");
        fs::write(&path, "Line one\n\n  Line two\n").unwrap();

        let meta = project_metadata(Some(&path), &PageConfig::default()).unwrap();
        assert_eq!(meta.description, "Line one\n\n  Line two\n");
    }

    #[test]
    fn project_metadata_defaults_without_text_file() {
        let defaults = PageConfig::default();
        let meta = project_metadata(None, &defaults).unwrap();
        assert_eq!(meta.title, "UNTITLED PROJECT");
        assert_eq!(meta.description, defaults.default_description);
        assert!(meta.source.is_none());
    }

    #[test]
    fn missing_social_file_is_placeholder() {
        let tmp = TempDir::new().unwrap();
        let href = read_social_link(&tmp.path().join("instagram.txt")).unwrap();
        assert_eq!(href, "#");
    }

    #[test]
    fn blank_social_file_is_placeholder() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hackaday.txt");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(read_social_link(&path).unwrap(), "#");
    }

    #[test]
    fn social_file_contents_trimmed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("linkedin.txt");
        fs::write(&path, "https://x.com\n").unwrap();
        assert_eq!(read_social_link(&path).unwrap(), "https://x.com");
    }

    #[test]
    fn social_links_follow_platform_table() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("linkedin.txt"), "https://x.com").unwrap();

        let links = read_social_links(tmp.path()).unwrap();
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Instagram", "LinkedIn", "Hackaday"]);
        assert_eq!(links[0].href, "#");
        assert_eq!(links[1].href, "https://x.com");
        assert_eq!(links[2].href, "#");
    }

    #[test]
    fn project_footer_links_are_placeholders() {
        let links = project_footer_links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[2].label, "Behance");
        assert!(links.iter().all(|l| l.href == "#"));
    }
}

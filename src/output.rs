//! CLI output formatting for both generators.
//!
//! Each step has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to the console.
//! Format functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Project page
//!
//! ```text
//! Scanning folder: images...
//! Loaded project text from: Lamp Study.txt
//! LAMP STUDY (3 photos)
//!     001 sketch
//!         Source: images/01-sketch.jpg
//!     002 prototype
//!         Source: images/02-prototype.png
//! Success! Generated gallery.html with 3 images sorted by number.
//! ```
//!
//! ## Index page
//!
//! ```text
//! Scanning folder: images...
//! Selected Works (2 projects)
//!     001 Lamp-Study → Lamp-Study/Lamp-Study.html
//!     002 clock → clock/clock.html
//! Links
//!     Instagram: #
//!     LinkedIn: https://linkedin.com/in/example
//! Success! Generated index.html with 2 images.
//! ```
//!
//! ## Failures
//!
//! ```text
//! Error: Folder 'images' not found.
//! Please create the folder and add images, or set images.folder in config.toml.
//! ```

use crate::generate::{BuildReport, GenerateError, PageKind};
use crate::scan::{IndexManifest, ProjectManifest, ScanError};
use std::error::Error;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn count_label(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// First status line of every run.
pub fn format_scanning(folder: &str) -> String {
    format!("Scanning folder: {folder}...")
}

/// Scanned project: text source, title, and images in page order.
pub fn format_project_scan(manifest: &ProjectManifest) -> Vec<String> {
    let mut lines = Vec::new();
    let meta = &manifest.metadata;

    if let Some(source) = &meta.source {
        lines.push(format!("Loaded project text from: {source}"));
    }
    lines.push(format!(
        "{} ({})",
        meta.title,
        count_label(manifest.images.len(), "photo")
    ));
    for (i, image) in manifest.images.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(1),
            format_index(i + 1),
            image.display_name
        ));
        lines.push(format!("{}Source: {}", indent(2), image.path));
    }
    lines
}

/// Scanned index: projects newest first with their link targets, then social links.
pub fn format_index_scan(manifest: &IndexManifest, heading: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        heading,
        count_label(manifest.images.len(), "project")
    )];
    for (i, image) in manifest.images.iter().enumerate() {
        lines.push(format!(
            "{}{} {} → {}/{}.html",
            indent(1),
            format_index(i + 1),
            image.stem,
            image.stem,
            image.stem
        ));
    }
    lines.push("Links".to_string());
    for link in &manifest.social {
        lines.push(format!("{}{}: {}", indent(1), link.label, link.href));
    }
    lines
}

/// Final success line, naming the written file.
pub fn format_generated(report: &BuildReport) -> String {
    let output_name = report
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.output.display().to_string());
    match report.kind {
        PageKind::Project => format!(
            "Success! Generated {} with {} images sorted by number.",
            output_name, report.image_count
        ),
        PageKind::Index => format!(
            "Success! Generated {} with {} images.",
            output_name, report.image_count
        ),
    }
}

/// Console lines for a failed run.
///
/// The two expected failures (missing folder, no images) get their plain
/// messages; anything else is reported with its error chain.
pub fn format_failure(err: &(dyn Error + 'static)) -> Vec<String> {
    let scan_err = err.downcast_ref::<ScanError>().or_else(|| {
        match err.downcast_ref::<GenerateError>() {
            Some(GenerateError::Scan(e)) => Some(e),
            _ => None,
        }
    });

    match scan_err {
        Some(e @ ScanError::FolderNotFound(_)) => vec![
            format!("Error: {e}"),
            "Please create the folder and add images, or set images.folder in config.toml."
                .to_string(),
        ],
        Some(e @ ScanError::NoImages(_)) => vec![e.to_string()],
        _ => {
            let mut lines = vec![format!("Error: {err}")];
            let mut source = err.source();
            while let Some(cause) = source {
                lines.push(format!("{}Caused by: {cause}", indent(1)));
                source = cause.source();
            }
            lines
        }
    }
}

pub fn print_scanning(folder: &str) {
    println!("{}", format_scanning(folder));
}

pub fn print_project_scan(manifest: &ProjectManifest) {
    for line in format_project_scan(manifest) {
        println!("{}", line);
    }
}

pub fn print_index_scan(manifest: &IndexManifest, heading: &str) {
    for line in format_index_scan(manifest, heading) {
        println!("{}", line);
    }
}

pub fn print_generated(report: &BuildReport) {
    println!("{}", format_generated(report));
}

pub fn print_failure(err: &(dyn Error + 'static)) {
    for line in format_failure(err) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageEntry, ProjectMetadata, SocialLink};
    use std::path::PathBuf;
    use std::time::SystemTime;

    fn entry(filename: &str, display_name: &str) -> ImageEntry {
        ImageEntry {
            filename: filename.to_string(),
            stem: crate::naming::stem(filename),
            display_name: display_name.to_string(),
            path: format!("images/{filename}"),
            modified: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn index_formatting() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn scanning_line() {
        assert_eq!(format_scanning("images"), "Scanning folder: images...");
    }

    #[test]
    fn project_scan_lists_images_in_order() {
        let manifest = ProjectManifest {
            metadata: ProjectMetadata {
                title: "LAMP STUDY".to_string(),
                description: String::new(),
                source: Some("Lamp Study.txt".to_string()),
            },
            images: vec![entry("01-sketch.jpg", "01 sketch"), entry("cover.jpg", "cover")],
        };
        let lines = format_project_scan(&manifest);
        assert_eq!(
            lines,
            vec![
                "Loaded project text from: Lamp Study.txt",
                "LAMP STUDY (2 photos)",
                "    001 01 sketch",
                "        Source: images/01-sketch.jpg",
                "    002 cover",
                "        Source: images/cover.jpg",
            ]
        );
    }

    #[test]
    fn project_scan_without_text_source() {
        let manifest = ProjectManifest {
            metadata: ProjectMetadata {
                title: "UNTITLED PROJECT".to_string(),
                description: String::new(),
                source: None,
            },
            images: vec![entry("1.jpg", "1")],
        };
        let lines = format_project_scan(&manifest);
        assert_eq!(lines[0], "UNTITLED PROJECT (1 photo)");
    }

    #[test]
    fn index_scan_shows_links() {
        let manifest = IndexManifest {
            images: vec![entry("Lamp-Study.jpg", "Lamp Study")],
            social: vec![
                SocialLink::placeholder("Instagram"),
                SocialLink {
                    label: "LinkedIn".to_string(),
                    href: "https://x.com".to_string(),
                },
            ],
        };
        let lines = format_index_scan(&manifest, "Selected Works");
        assert_eq!(lines[0], "Selected Works (1 project)");
        assert_eq!(lines[1], "    001 Lamp-Study → Lamp-Study/Lamp-Study.html");
        assert_eq!(lines[2], "Links");
        assert_eq!(lines[3], "    Instagram: #");
        assert_eq!(lines[4], "    LinkedIn: https://x.com");
    }

    #[test]
    fn generated_lines() {
        let report = BuildReport {
            kind: PageKind::Project,
            output: PathBuf::from("./gallery.html"),
            image_count: 4,
        };
        assert_eq!(
            format_generated(&report),
            "Success! Generated gallery.html with 4 images sorted by number."
        );

        let report = BuildReport {
            kind: PageKind::Index,
            output: PathBuf::from("./site/index.html"),
            image_count: 2,
        };
        assert_eq!(
            format_generated(&report),
            "Success! Generated index.html with 2 images."
        );
    }

    #[test]
    fn missing_folder_failure_has_hint() {
        let err = GenerateError::Scan(ScanError::FolderNotFound(PathBuf::from("images")));
        let lines = format_failure(&err);
        assert_eq!(lines[0], "Error: Folder 'images' not found.");
        assert!(lines[1].contains("images.folder"));
    }

    #[test]
    fn no_images_failure_is_plain() {
        let err = ScanError::NoImages(PathBuf::from("images"));
        assert_eq!(format_failure(&err), vec!["No images found in the folder."]);
    }

    #[test]
    fn other_failures_include_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GenerateError::Io(io);
        let lines = format_failure(&err);
        assert_eq!(lines[0], "Error: IO error: denied");
    }
}

//! Image folder scanning.
//!
//! Stage 1 of both generators. Lists the image folder once (non-recursive,
//! sorted by filename), keeps regular files with an accepted extension, and
//! collects the metadata each page variant needs:
//!
//! ```text
//! images/
//! ├── Lamp Study.txt        # project page: title + description
//! ├── logo.png              # index page: header logo, never listed
//! ├── 01-sketch.jpg
//! ├── 02-prototype.png
//! └── 10-final.webp
//! ```
//!
//! ## Ordering
//!
//! - **Project page**: ascending by the first number in the filename,
//!   unnumbered images last ([`naming::number_sort_key`]).
//! - **Index page**: newest modification time first.
//!
//! Both sorts are stable, so ties keep filename order.
//!
//! ## Validation
//!
//! Scanning fails if the folder does not exist or holds no qualifying
//! image. Nothing downstream runs in either case, so no page is written.

use crate::config::SiteConfig;
use crate::metadata;
use crate::naming;
use crate::types::{ImageEntry, ProjectMetadata, SocialLink};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Folder '{0}' not found.")]
    FolderNotFound(PathBuf),
    #[error("No images found in the folder.")]
    NoImages(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory listing error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Scan result for the project page.
#[derive(Debug)]
pub struct ProjectManifest {
    pub metadata: ProjectMetadata,
    /// Images ordered by filename number.
    pub images: Vec<ImageEntry>,
}

/// Scan result for the index page.
#[derive(Debug)]
pub struct IndexManifest {
    /// Images ordered newest first, logo and exclusions removed.
    pub images: Vec<ImageEntry>,
    pub social: Vec<SocialLink>,
}

/// A regular file in the image folder.
struct FolderFile {
    path: PathBuf,
    filename: String,
    modified: SystemTime,
}

/// Scan the image folder for the project page.
pub fn scan_project(root: &Path, config: &SiteConfig) -> Result<ProjectManifest, ScanError> {
    let folder = image_folder(root, config)?;
    let files = list_files(&folder)?;

    let text_file = files
        .iter()
        .find(|f| has_extension(&f.filename, "txt"))
        .map(|f| f.path.as_path());
    let metadata = metadata::project_metadata(text_file, &config.page)?;

    let mut images = collect_images(&files, config, |_| true);
    if images.is_empty() {
        return Err(ScanError::NoImages(folder));
    }
    images.sort_by(|a, b| naming::compare_by_number(&a.filename, &b.filename));

    Ok(ProjectManifest { metadata, images })
}

/// Scan the image folder and social link files for the index page.
pub fn scan_index(root: &Path, config: &SiteConfig) -> Result<IndexManifest, ScanError> {
    let folder = image_folder(root, config)?;
    let files = list_files(&folder)?;

    let mut images = collect_images(&files, config, |name| !config.index.excludes(name));
    if images.is_empty() {
        return Err(ScanError::NoImages(folder));
    }
    sort_newest_first(&mut images);

    let social = metadata::read_social_links(&root.join(&config.index.social_dir))?;

    Ok(IndexManifest { images, social })
}

/// Order images by modification time, newest first. Ties keep their order.
pub fn sort_newest_first(images: &mut [ImageEntry]) {
    images.sort_by(|a, b| b.modified.cmp(&a.modified));
}

fn image_folder(root: &Path, config: &SiteConfig) -> Result<PathBuf, ScanError> {
    let folder = root.join(&config.images.folder);
    if !folder.is_dir() {
        return Err(ScanError::FolderNotFound(PathBuf::from(&config.images.folder)));
    }
    Ok(folder)
}

fn list_files(folder: &Path) -> Result<Vec<FolderFile>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // Unreadable entries (dangling links) are skipped; only a
            // failure to list the folder itself aborts the scan.
            Err(err) if err.depth() > 0 => continue,
            Err(err) => return Err(err.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        files.push(FolderFile {
            filename: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
            modified,
        });
    }
    Ok(files)
}

fn collect_images(
    files: &[FolderFile],
    config: &SiteConfig,
    keep: impl Fn(&str) -> bool,
) -> Vec<ImageEntry> {
    files
        .iter()
        .filter(|f| is_image(&f.filename, config) && keep(&f.filename))
        .map(|f| ImageEntry {
            stem: naming::stem(&f.filename),
            display_name: naming::display_name(&f.filename),
            path: image_path(&config.images.folder, &f.filename),
            filename: f.filename.clone(),
            modified: f.modified,
        })
        .collect()
}

fn is_image(filename: &str, config: &SiteConfig) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| config.images.accepts(&ext.to_string_lossy()))
        .unwrap_or(false)
}

fn has_extension(filename: &str, wanted: &str) -> bool {
    Path::new(filename)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Path written into the page: always forward slashes, relative to the page.
fn image_path(folder: &str, filename: &str) -> String {
    format!("{}/{}", folder.trim_end_matches(['/', '\\']), filename)
}

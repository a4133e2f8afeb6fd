//! Shared test utilities: temporary image folders with controlled timestamps.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let images = image_dir(tmp.path());
//! write_image_at(&images, "old.jpg", 1_000);
//! write_image_at(&images, "new.jpg", 2_000);
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Create the default `images/` folder under `root` and return its path.
pub fn image_dir(root: &Path) -> PathBuf {
    let dir = root.join("images");
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a placeholder image. Scanning only looks at names, never content.
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"fake image").unwrap();
    path
}

/// Write a placeholder image with a modification time `secs` after the epoch.
pub fn write_image_at(dir: &Path, name: &str, secs: u64) -> PathBuf {
    let path = write_image(dir, name);
    set_mtime(&path, secs);
    path
}

/// Set a file's modification time to `secs` after the epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the working root next to the image folder and is entirely optional: every
//! key has a default matching a plain `images/` folder layout.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! owner = "Ekaggrat Singh Kalsi"   # Index page header and <title>
//! brand = "Ekaggrat"               # Project page header and <title> suffix
//! studio = "Ekaggrat Studio"       # Footer copyright line
//! home_url = "https://ekaggrat.com"
//!
//! [images]
//! folder = "images"
//! extensions = ["jpg", "jpeg", "png", "webp", "gif"]
//!
//! [page]
//! output = "gallery.html"
//! default_title = "UNTITLED PROJECT"
//! default_description = "No project description text file found. ..."
//! role = "Lorem ipsum ..."
//!
//! [index]
//! output = "index.html"
//! heading = "Selected Works"
//! logo = "logo.png"          # Shown in the header, never listed as a project
//! exclude = []               # Extra filenames to leave out of the index
//! social_dir = "."           # Where instagram.txt, linkedin.txt, hackaday.txt live
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [images]
//! folder = "photos"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the working root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Names and links shown in page headers and footers.
    pub site: SiteInfo,
    /// Where images are found and which files count as images.
    pub images: ImagesConfig,
    /// Project page (single gallery) settings.
    pub page: PageConfig,
    /// Index (landing) page settings.
    pub index: IndexConfig,
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.folder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "images.folder must not be empty".into(),
            ));
        }
        if self.images.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "images.extensions must not be empty".into(),
            ));
        }
        if self.page.output.trim().is_empty() {
            return Err(ConfigError::Validation(
                "page.output must not be empty".into(),
            ));
        }
        if self.index.output.trim().is_empty() {
            return Err(ConfigError::Validation(
                "index.output must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Identity of the portfolio owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Full name, used on the index page.
    pub owner: String,
    /// Short brand name, used on project pages.
    pub brand: String,
    /// Studio name in the footer copyright line.
    pub studio: String,
    /// Target of the header "Home" link.
    pub home_url: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            owner: "Ekaggrat Singh Kalsi".to_string(),
            brand: "Ekaggrat".to_string(),
            studio: "Ekaggrat Studio".to_string(),
            home_url: "https://ekaggrat.com".to_string(),
        }
    }
}

/// Image discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Image folder, relative to the working root. Also the prefix of every
    /// image path written into the HTML.
    pub folder: String,
    /// Accepted file extensions, compared case-insensitively.
    pub extensions: Vec<String>,
}

impl ImagesConfig {
    /// Whether `ext` (with or without a leading dot) is an accepted image extension.
    pub fn accepts(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.');
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            folder: "images".to_string(),
            extensions: ["jpg", "jpeg", "png", "webp", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Project page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Output file, relative to the working root.
    pub output: String,
    /// Title used when the image folder has no `.txt` file.
    pub default_title: String,
    /// Description used when the image folder has no `.txt` file.
    pub default_description: String,
    /// Body of the "My Role" section.
    pub role: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            output: "gallery.html".to_string(),
            default_title: "UNTITLED PROJECT".to_string(),
            default_description: "No project description text file found. \
                Please add a .txt file inside your images folder."
                .to_string(),
            role: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod \
                tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
                quis nostrud exercitation ullamco laboris nisi ut aliquip."
                .to_string(),
        }
    }
}

/// Index page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Output file, relative to the working root.
    pub output: String,
    /// Section heading above the grid; also part of the `<title>`.
    pub heading: String,
    /// Logo filename inside the image folder. Empty to hide the logo.
    pub logo: String,
    /// Additional filenames (case-insensitive) left out of the grid.
    pub exclude: Vec<String>,
    /// Directory holding the social link files, relative to the working root.
    pub social_dir: String,
}

impl IndexConfig {
    /// Whether `filename` must be left out of the index grid.
    ///
    /// The logo is always excluded so it never shows up as a project.
    pub fn excludes(&self, filename: &str) -> bool {
        (!self.logo.is_empty() && self.logo.eq_ignore_ascii_case(filename))
            || self
                .exclude
                .iter()
                .any(|name| name.eq_ignore_ascii_case(filename))
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output: "index.html".to_string(),
            heading: "Selected Works".to_string(),
            logo: "logo.png".to_string(),
            exclude: Vec::new(),
            social_dir: ".".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it is not valid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the working root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value()?, overlay),
        None => stock_defaults_value()?,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-gen configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Who the portfolio belongs to
# ---------------------------------------------------------------------------
[site]
# Full name, shown in the index page header and <title>.
owner = "Ekaggrat Singh Kalsi"
# Short name, shown in project page headers and <title>.
brand = "Ekaggrat"
# Footer copyright line: "(c) <year> <studio>".
studio = "Ekaggrat Studio"
# Target of the header "Home" link.
home_url = "https://ekaggrat.com"

# ---------------------------------------------------------------------------
# Image discovery
# ---------------------------------------------------------------------------
[images]
# Folder scanned for images, relative to the working directory.
folder = "images"
# Accepted extensions (case-insensitive).
extensions = ["jpg", "jpeg", "png", "webp", "gif"]

# ---------------------------------------------------------------------------
# Project page (gallery-gen page)
# ---------------------------------------------------------------------------
[page]
output = "gallery.html"
# Used when the image folder has no .txt description file.
default_title = "UNTITLED PROJECT"
default_description = "No project description text file found. Please add a .txt file inside your images folder."
# Body of the "My Role" section.
role = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip."

# ---------------------------------------------------------------------------
# Index page (gallery-gen index)
# ---------------------------------------------------------------------------
[index]
output = "index.html"
heading = "Selected Works"
# Logo inside the image folder. Shown in the header, never listed as a project.
logo = "logo.png"
# More filenames to leave out of the grid.
exclude = []
# Directory holding instagram.txt, linkedin.txt and hackaday.txt.
social_dir = "."
"##
}

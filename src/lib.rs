//! # gallery-gen
//!
//! Turns a folder of images into one self-contained HTML page. Two pages are
//! supported, each built by its own command:
//!
//! - **Project page** (`gallery.html`): every image of one project in a grid,
//!   ordered by the first number in the filename, with a title and
//!   description taken from a `.txt` file and a full-screen lightbox viewer.
//! - **Index page** (`index.html`): a portfolio landing page. Each image
//!   stands for one project and links to `<name>/<name>.html`; the newest
//!   image comes first and the footer links come from small text files.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      images/   →  ProjectManifest | IndexManifest
//! 2. Generate  manifest  →  gallery.html | index.html
//! ```
//!
//! Scanning does all filesystem reads and fails early (missing folder, no
//! images), so generation only runs on a complete manifest and a failed
//! run never leaves a partial page behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists the image folder, filters, sorts, collects metadata |
//! | [`generate`] | Stage 2: renders the page with Maud and writes it |
//! | [`config`] | Optional `config.toml`: loading, merging over defaults, validation |
//! | [`naming`] | Sort keys and display names derived from filenames |
//! | [`metadata`] | Project text file and social link files |
//! | [`types`] | Types shared between the stages |
//! | [`output`] | Console output formatting |
//!
//! # Design Decisions
//!
//! ## The Filesystem Is the Database
//!
//! Order, titles, and links all come from file names, modification times,
//! and one-line text files. There is nothing to keep in sync and every run
//! recomputes everything from scratch.
//!
//! ## Maud Over String Templates
//!
//! Pages are built with [Maud](https://maud.lambda.xyz/). Descriptions and
//! filenames are user-controlled text; Maud escapes every interpolation, so
//! a stray `<` in a description cannot break the page.
//!
//! ## One Fixed Lightbox Script
//!
//! The viewer script is the same for every page. The only generated part is
//! a JSON array of image paths declared in front of it.

pub mod config;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

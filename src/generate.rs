//! HTML page generation.
//!
//! Stage 2 of both generators. Takes a scan manifest and renders one
//! self-contained HTML document, then writes it over the output file.
//!
//! ## Generated Pages
//!
//! - **Project page** (`gallery.html`): image grid ordered by filename
//!   number, description and role sections, and a lightbox viewer.
//! - **Index page** (`index.html`): newest-first grid where each image links
//!   to its project page at `<stem>/<stem>.html`, plus social footer links.
//!
//! ## Styling and Script
//!
//! Pages pull Tailwind from its CDN, so markup carries utility classes only.
//! Static assets are embedded at compile time:
//! - `static/fonts.css`: Manrope import and body font
//! - `static/lightbox.js`: open/close with fade, wraparound next/previous,
//!   keyboard shortcuts (Escape, arrow keys)
//!
//! The lightbox script is fixed. The only per-page data it sees is the
//! `images` array of paths, serialized to JSON ahead of it.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated text (titles, descriptions, filenames, URLs) is escaped.

use crate::config::SiteConfig;
use crate::metadata;
use crate::scan::{self, IndexManifest, ProjectManifest, ScanError};
use crate::types::{ImageEntry, SocialLink};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which of the two pages a build produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Project,
    Index,
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    pub kind: PageKind,
    pub output: PathBuf,
    pub image_count: usize,
}

const FONT_CSS: &str = include_str!("../static/fonts.css");
const LIGHTBOX_JS: &str = include_str!("../static/lightbox.js");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const IMAGE_FALLBACK: &str = "this.onerror=null; this.src='https://placehold.co/640x480/f3f3f3/333?text=IMAGE+NOT+FOUND';";
const THUMB_IMG_CLASS: &str = "w-full h-full object-cover transition-transform duration-700 ease-out group-hover:-translate-y-12";
const THUMB_FRAME_CLASS: &str = "relative w-full aspect-[4/3] overflow-hidden bg-gray-100";

/// Scan the image folder and write the project page.
pub fn build_project_page(
    root: &Path,
    config: &SiteConfig,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    let manifest = scan::scan_project(root, config)?;
    write_project_page(root, config, &manifest, year)
}

/// Scan the image folder and social files and write the index page.
pub fn build_index_page(
    root: &Path,
    config: &SiteConfig,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    let manifest = scan::scan_index(root, config)?;
    write_index_page(root, config, &manifest, year)
}

/// Render and write the project page for an already scanned folder.
pub fn write_project_page(
    root: &Path,
    config: &SiteConfig,
    manifest: &ProjectManifest,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    let page = render_project_page(manifest, config, year)?;
    let output = root.join(&config.page.output);
    fs::write(&output, page.into_string())?;
    Ok(BuildReport {
        kind: PageKind::Project,
        output,
        image_count: manifest.images.len(),
    })
}

/// Render and write the index page for an already scanned folder.
pub fn write_index_page(
    root: &Path,
    config: &SiteConfig,
    manifest: &IndexManifest,
    year: i32,
) -> Result<BuildReport, GenerateError> {
    let page = render_index_page(manifest, config, year);
    let output = root.join(&config.index.output);
    fs::write(&output, page.into_string())?;
    Ok(BuildReport {
        kind: PageKind::Index,
        output,
        image_count: manifest.images.len(),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(TAILWIND_CDN) {}
                style { (PreEscaped(FONT_CSS)) }
            }
            body class="bg-white text-black" {
                (content)
            }
        }
    }
}

/// Renders the fixed top bar: optional logo, name, and a Home link.
///
/// With `collapse_nav` the Home link only shows from the `md` breakpoint up.
fn site_header(name: &str, logo_src: Option<&str>, home_url: &str, collapse_nav: bool) -> Markup {
    let nav_display = if collapse_nav { "hidden md:flex" } else { "flex" };
    html! {
        header class="fixed top-0 left-0 w-full bg-white/90 backdrop-blur-sm z-50 py-6 px-8 flex justify-between items-center border-b border-gray-100" {
            div class="flex items-center gap-4" {
                @if let Some(src) = logo_src {
                    img src=(src) alt="Logo" class="h-6 w-auto object-contain";
                }
                div class="text-2xl font-semibold tracking-[0.2em] uppercase" { (name) }
            }
            nav class={ (nav_display) " space-x-8 text-xs font-medium tracking-widest uppercase text-gray-500" } {
                a href=(home_url) class="hover:text-black transition-colors" { "Home" }
            }
        }
    }
}

/// Renders the copyright line and social links
fn site_footer(year: i32, studio: &str, links: &[SocialLink], new_tab: bool) -> Markup {
    html! {
        footer class="mt-32 border-t border-gray-200 pt-8 flex flex-col md:flex-row justify-between items-center text-[10px] tracking-widest uppercase text-gray-400" {
            div { "© " (year) " " (studio) }
            div class="mt-4 md:mt-0 space-x-6" {
                @for link in links {
                    a href=(link.href) target=[new_tab.then_some("_blank")] class="hover:text-black" {
                        (link.label)
                    }
                }
            }
        }
    }
}

/// A project-page grid cell that opens the lightbox at `index`
fn project_item(index: usize, image: &ImageEntry) -> Markup {
    html! {
        div class="group block cursor-pointer" onclick={ "openModal(" (index) ")" } {
            div class=(THUMB_FRAME_CLASS) {
                img src=(image.path) alt=(image.display_name) class=(THUMB_IMG_CLASS) onerror=(IMAGE_FALLBACK);
            }
        }
    }
}

/// An index-page grid cell linking to the project folder named after the image
fn index_item(image: &ImageEntry) -> Markup {
    html! {
        a href={ (image.stem) "/" (image.stem) ".html" } class="group block cursor-pointer" {
            div class=(THUMB_FRAME_CLASS) {
                img src=(image.path) alt=(image.stem) class=(THUMB_IMG_CLASS) onerror=(IMAGE_FALLBACK);
                div class="absolute inset-0 bg-black/0 group-hover:bg-black/40 transition-colors duration-500" {}
                div class="absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-500" {
                    h2 class="text-white text-lg font-semibold tracking-widest uppercase text-center px-4" {
                        (image.stem.to_uppercase())
                    }
                }
            }
        }
    }
}

/// Serialize image paths for the lightbox script.
///
/// `<` is emitted as `\u003c` so no path can terminate the script element.
pub fn lightbox_array(images: &[ImageEntry]) -> Result<String, serde_json::Error> {
    let paths: Vec<&str> = images.iter().map(|i| i.path.as_str()).collect();
    Ok(serde_json::to_string(&paths)?.replace('<', "\\u003c"))
}

/// Renders the full-screen viewer overlay and its script
fn lightbox(images_json: &str) -> Markup {
    let icon_button = "absolute text-black hover:text-gray-500 focus:outline-none z-50 transition-colors";
    html! {
        div id="lightbox" class="fixed inset-0 z-[100] bg-white/95 hidden flex-col justify-center items-center opacity-0 transition-opacity duration-300" onclick="closeModal()" {
            button class={ (icon_button) " top-8 right-8" } onclick="closeModal()" aria-label="Close" {
                svg xmlns="http://www.w3.org/2000/svg" class="h-10 w-10" fill="none" viewBox="0 0 24 24" stroke="currentColor" {
                    path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M6 18L18 6M6 6l12 12" {}
                }
            }
            button class={ (icon_button) " left-4 md:left-8 top-1/2 -translate-y-1/2 p-4" } onclick="prevImage(event)" aria-label="Previous" {
                svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-10 h-10" {
                    path stroke-linecap="round" stroke-linejoin="round" d="M15.75 19.5L8.25 12l7.5-7.5" {}
                }
            }
            button class={ (icon_button) " right-4 md:right-8 top-1/2 -translate-y-1/2 p-4" } onclick="nextImage(event)" aria-label="Next" {
                svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" class="w-10 h-10" {
                    path stroke-linecap="round" stroke-linejoin="round" d="M8.25 4.5l7.5 7.5-7.5 7.5" {}
                }
            }
            div class="max-w-[90vw] max-h-[90vh] flex justify-center items-center w-full h-full p-12" onclick="event.stopPropagation()" {
                img id="lightbox-img" src="" alt="Enlarged view" class="max-w-full max-h-full object-contain shadow-2xl transition-opacity duration-300";
            }
        }
        script {
            (PreEscaped(format!("const images = {images_json};\n")))
            (PreEscaped(LIGHTBOX_JS))
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the single-project gallery page
pub fn render_project_page(
    manifest: &ProjectManifest,
    config: &SiteConfig,
    year: i32,
) -> Result<Markup, GenerateError> {
    let meta = &manifest.metadata;
    let images_json = lightbox_array(&manifest.images)?;
    let page_title = format!("{} - {}", meta.title, config.site.brand.to_uppercase());

    let content = html! {
        (site_header(&config.site.brand, None, &config.site.home_url, false))
        div class="max-w-[1600px] mx-auto pt-32 pb-20 px-4 md:px-12" {
            h1 class="text-2xl font-bold tracking-[0.3em] uppercase text-gray-800 mb-12 text-center" {
                (meta.title)
            }
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-3" {
                @for (index, image) in manifest.images.iter().enumerate() {
                    (project_item(index, image))
                }
            }
            div class="mt-24 max-w-4xl" {
                h2 class="text-xl font-bold tracking-[0.2em] uppercase mb-6" { "Description" }
                p class="text-sm text-gray-600 leading-relaxed mb-12 whitespace-pre-wrap" { (meta.description) }
                h3 class="text-sm font-bold tracking-[0.2em] uppercase mb-4 text-gray-800" { "My Role" }
                p class="text-sm text-gray-600 leading-relaxed" { (config.page.role) }
            }
            (site_footer(year, &config.site.studio, &metadata::project_footer_links(), false))
        }
        (lightbox(&images_json))
    };

    Ok(base_document(&page_title, content))
}

/// Renders the landing page linking to every project
pub fn render_index_page(manifest: &IndexManifest, config: &SiteConfig, year: i32) -> Markup {
    let logo_src = (!config.index.logo.is_empty()).then(|| {
        format!(
            "{}/{}",
            config.images.folder.trim_end_matches(['/', '\\']),
            config.index.logo
        )
    });
    let page_title = format!("{} - {}", config.site.owner, config.index.heading);

    let content = html! {
        (site_header(&config.site.owner, logo_src.as_deref(), &config.site.home_url, true))
        div class="max-w-[1600px] mx-auto pt-32 pb-20 px-4 md:px-12" {
            h1 class="text-xs font-bold tracking-[0.3em] uppercase text-gray-400 mb-12 text-center md:text-left" {
                (config.index.heading)
            }
            div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-3" {
                @for image in &manifest.images {
                    (index_item(image))
                }
            }
            (site_footer(year, &config.site.studio, &manifest.social, true))
        }
    };

    base_document(&page_title, content)
}

// ============================================================================
// Tests
// ============================================================================

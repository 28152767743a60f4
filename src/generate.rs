//! Site generation.
//!
//! Loads the wedding document and `config.toml` from a content directory,
//! renders the single page, and writes it next to a copy of the assets.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The whole invitation: markup, inline CSS and JS
//! ├── images/           # Copied from content/assets/
//! │   ├── hero.jpg
//! │   └── ...
//! └── audio/
//!     └── shehnai.mp3
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Layout, animations, fallback gradients (palette
//!   injected from config as custom properties)
//! - `static/invitation.js`: Loader timing, particles, reveal, navbar,
//!   lightbox and music toggle
//!
//! The script reads its timings from the `invitation-runtime` JSON block, so
//! the embedded source never changes between builds.

use crate::assets::{self, AssetError, AssetRef, Dimensions};
use crate::config::{self, ConfigError, SiteConfig};
use crate::render::{self, RenderContext};
use crate::sections::{self, NavItem, SectionKind};
use crate::wedding::{self, WeddingData, WeddingError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Wedding(#[from] WeddingError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Asset(#[from] AssetError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/invitation.js");

/// A loaded content directory.
#[derive(Debug)]
pub struct Site {
    pub document: PathBuf,
    pub data: WeddingData,
    pub config: SiteConfig,
    pub assets_root: PathBuf,
}

/// What the page will contain, computed without writing anything.
#[derive(Debug)]
pub struct Inventory {
    pub document: PathBuf,
    pub sections: Vec<SectionKind>,
    pub nav: Vec<NavItem>,
    pub dividers: usize,
    pub assets_root: PathBuf,
    /// Local references with no file behind them.
    pub missing: Vec<AssetRef>,
}

#[derive(Debug)]
pub struct BuildReport {
    pub inventory: Inventory,
    pub output: PathBuf,
    pub page_bytes: usize,
    pub assets_copied: usize,
    /// Memory images whose real proportions picked the card shape.
    pub probed: usize,
}

/// Load the document and config from `source`.
pub fn load_site(source: &Path) -> Result<Site, GenerateError> {
    let (document, data) = wedding::load_wedding(source)?;
    let config = config::load_config(source)?;
    let assets_root = source.join(&config.assets_dir);
    Ok(Site {
        document,
        data,
        config,
        assets_root,
    })
}

pub fn inventory(site: &Site) -> Inventory {
    let sections = sections::enabled_sections(&site.data);
    Inventory {
        document: site.document.clone(),
        dividers: sections::divider_count(sections.len()),
        nav: sections::nav_items(&site.data),
        sections,
        assets_root: site.assets_root.clone(),
        missing: assets::missing_assets(&site.data, &site.assets_root),
    }
}

/// Load and validate `source` without producing output.
pub fn check(source: &Path) -> Result<Inventory, GenerateError> {
    let site = load_site(source)?;
    Ok(inventory(&site))
}

/// Render the complete `index.html`.
pub fn render_site(data: &WeddingData, config: &SiteConfig, dimensions: &Dimensions) -> String {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let ctx = RenderContext { config, dimensions };
    render::compose_page(data, &ctx, &css, JS).into_string()
}

/// Build `source` into `output_dir`.
pub fn generate(source: &Path, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    let site = load_site(source)?;
    let inventory = inventory(&site);

    fs::create_dir_all(output_dir)?;

    let assets_copied = assets::copy_assets(&site.assets_root, output_dir)?;
    let dimensions = assets::probe_memory_dimensions(&site.data, &site.assets_root);

    let page = render_site(&site.data, &site.config, &dimensions);
    fs::write(output_dir.join("index.html"), &page)?;

    Ok(BuildReport {
        inventory,
        output: output_dir.to_path_buf(),
        page_bytes: page.len(),
        assets_copied,
        probed: dimensions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn content_dir(document: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wedding.json"), document).unwrap();
        tmp
    }

    #[test]
    fn render_site_embeds_palette_and_script() {
        let config = SiteConfig::default();
        let html = render_site(&full_wedding(), &config, &Dimensions::new());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("--color-gold: #d4a853"));
        assert!(html.contains("invitation-runtime"));
        assert!(html.contains("data-reveal"));
    }

    #[test]
    fn generate_writes_index_and_copies_assets() {
        let src = content_dir(wedding::sample_document());
        fs::create_dir_all(src.path().join("assets/images")).unwrap();
        fs::write(src.path().join("assets/images/hero.jpg"), b"x").unwrap();
        let out = TempDir::new().unwrap();

        let report = generate(src.path(), out.path()).unwrap();
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert_eq!(report.page_bytes, html.len());
        assert_eq!(report.assets_copied, 1);
        assert!(out.path().join("images/hero.jpg").is_file());
        assert!(html.contains("Priya"));
        assert_eq!(report.inventory.dividers, report.inventory.sections.len() - 1);
    }

    #[test]
    fn generate_without_assets_dir_succeeds() {
        let src = content_dir(r#"{"site": {"coupleNames": "A & B"}}"#);
        let out = TempDir::new().unwrap();
        let report = generate(src.path(), out.path()).unwrap();
        assert_eq!(report.assets_copied, 0);
        assert!(report.inventory.sections.is_empty());
        assert_eq!(report.inventory.dividers, 0);
    }

    #[test]
    fn config_overrides_apply() {
        let src = content_dir(r#"{"site": {"coupleNames": "A & B"}}"#);
        fs::write(
            src.path().join("config.toml"),
            "[loader]\ndisplay_ms = 1200\n[colors]\ngold = \"#ccaa55\"\n",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        generate(src.path(), out.path()).unwrap();
        let html = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(html.contains(r#""loaderDisplayMs":1200"#));
        assert!(html.contains("--color-gold: #ccaa55"));
    }

    #[test]
    fn missing_document_is_an_error() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let err = generate(src.path(), out.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Wedding(WeddingError::NotFound(_))));
    }

    #[test]
    fn load_site_reads_toml_document() {
        let src = TempDir::new().unwrap();
        fs::write(
            src.path().join("wedding.toml"),
            "[site]\ncoupleNames = \"Meera & Kabir\"\n",
        )
        .unwrap();
        let site = load_site(src.path()).unwrap();
        assert_eq!(site.document, src.path().join("wedding.toml"));
        assert_eq!(site.data.site.couple_names, "Meera & Kabir");
        assert_eq!(site.assets_root, src.path().join("assets"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let src = content_dir(r#"{"site": {}}"#);
        fs::write(src.path().join("config.toml"), "[loader]\nbogus = 1\n").unwrap();
        let err = check(src.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
    }

    #[test]
    fn check_lists_missing_assets() {
        let src = content_dir(wedding::sample_document());
        let inv = check(src.path()).unwrap();
        assert!(!inv.missing.is_empty());
        assert!(inv.missing.iter().any(|r| r.label == "hero.backgroundImage"));
        assert_eq!(inv.nav.len(), inv.sections.len());
    }
}

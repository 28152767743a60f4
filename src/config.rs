//! Build configuration.
//!
//! The wedding document says *what* the page shows; `config.toml` says *how*
//! it is built and animated. Both live in the content root:
//!
//! ```text
//! content/
//! ├── wedding.json             # The document (see `wedding`)
//! ├── config.toml              # Build settings (optional, sparse)
//! └── assets/                  # Copied verbatim to the output root
//!     └── images/hero.jpg      # Referenced as "/images/hero.jpg"
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"     # Copied to the output root
//! lang = "en"               # <html lang>
//!
//! [colors]
//! background = "#0a0505"
//! ivory = "#fff9f3"
//! foreground = "#3d1f1a"
//! gold = "#d4a853"
//! gold_light = "#f0d78c"
//! gold_dark = "#b8860b"
//! maroon = "#800020"
//! peach = "#fde4cf"
//!
//! [loader]
//! display_ms = 3000         # Splash duration before the exit fade starts
//! exit_ms = 800             # Exit fade; content appears when it ends
//!
//! [navbar]
//! scroll_threshold = 50     # px of scroll before the bar turns solid
//!
//! [particles]
//! bokeh = 20                # Loader motes
//! petals = 15               # Hero falling petals
//! glow = 25                 # Hero glow specks
//! sparkles = 40             # Closing sparkles
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Stock defaults are serialized to a TOML table,
//! the user file is merged over it key by key, and the result is deserialized
//! and validated. Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Upper bound for any particle count. Beyond this the page stutters on phones.
pub const MAX_PARTICLES: u32 = 200;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build settings loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory under the content root copied to the output root.
    pub assets_dir: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Palette, emitted as CSS custom properties.
    pub colors: ColorConfig,
    /// Intro loader timings.
    pub loader: LoaderConfig,
    /// Navbar behavior.
    pub navbar: NavbarConfig,
    /// Cosmetic particle counts.
    pub particles: ParticlesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            lang: "en".to_string(),
            colors: ColorConfig::default(),
            loader: LoaderConfig::default(),
            navbar: NavbarConfig::default(),
            particles: ParticlesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.loader.display_ms == 0 {
            return Err(ConfigError::Validation(
                "loader.display_ms must be non-zero".into(),
            ));
        }
        let p = &self.particles;
        for (name, count) in [
            ("bokeh", p.bokeh),
            ("petals", p.petals),
            ("glow", p.glow),
            ("sparkles", p.sparkles),
        ] {
            if count > MAX_PARTICLES {
                return Err(ConfigError::Validation(format!(
                    "particles.{name} must be at most {MAX_PARTICLES}"
                )));
            }
        }
        if self.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assets_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Page palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Dark backdrop behind the loader and hero.
    pub background: String,
    /// Light page background.
    pub ivory: String,
    /// Body text on light backgrounds.
    pub foreground: String,
    pub gold: String,
    pub gold_light: String,
    pub gold_dark: String,
    pub maroon: String,
    /// Fallback gradient tint for missing images.
    pub peach: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#0a0505".to_string(),
            ivory: "#fff9f3".to_string(),
            foreground: "#3d1f1a".to_string(),
            gold: "#d4a853".to_string(),
            gold_light: "#f0d78c".to_string(),
            gold_dark: "#b8860b".to_string(),
            maroon: "#800020".to_string(),
            peach: "#fde4cf".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// How long the splash stays fully visible, in milliseconds.
    pub display_ms: u32,
    /// Length of the exit fade, in milliseconds.
    pub exit_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            exit_ms: 800,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    /// Vertical scroll, in px, past which the bar switches to its compact style.
    pub scroll_threshold: u32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticlesConfig {
    pub bokeh: u32,
    pub petals: u32,
    pub glow: u32,
    pub sparkles: u32,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            bokeh: 20,
            petals: 15,
            glow: 25,
            sparkles: 40,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, over stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Invitation Build Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# The invitation content itself lives in wedding.json (run
# 'invitation sample' for a starter document).

# Directory under the content root copied verbatim to the output root.
# A document reference like "/images/hero.jpg" resolves to
# <assets_dir>/images/hero.jpg.
assets_dir = "assets"

# Value of the <html lang> attribute.
lang = "en"

# ---------------------------------------------------------------------------
# Palette (CSS custom properties)
# ---------------------------------------------------------------------------
[colors]
background = "#0a0505"    # Loader and hero backdrop
ivory = "#fff9f3"         # Page background
foreground = "#3d1f1a"    # Body text
gold = "#d4a853"
gold_light = "#f0d78c"
gold_dark = "#b8860b"
maroon = "#800020"
peach = "#fde4cf"         # Fallback gradient for missing images

# ---------------------------------------------------------------------------
# Intro loader
# ---------------------------------------------------------------------------
[loader]
# Milliseconds the splash stays fully visible.
display_ms = 3000
# Milliseconds of exit fade. The page content appears when it ends.
exit_ms = 800

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[navbar]
# Pixels of vertical scroll before the bar switches to its compact style.
scroll_threshold = 50

# ---------------------------------------------------------------------------
# Decorative particles (0 disables a field, max 200)
# ---------------------------------------------------------------------------
[particles]
bokeh = 20       # Loader
petals = 15      # Hero
glow = 25        # Hero
sparkles = 40    # Closing
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-ivory: {ivory};
    --color-fg: {foreground};
    --color-gold: {gold};
    --color-gold-light: {gold_light};
    --color-gold-dark: {gold_dark};
    --color-maroon: {maroon};
    --color-peach: {peach};
}}"#,
        background = colors.background,
        ivory = colors.ivory,
        foreground = colors.foreground,
        gold = colors.gold,
        gold_light = colors.gold_light,
        gold_dark = colors.gold_dark,
        maroon = colors.maroon,
        peach = colors.peach,
    )
}

//! Initial state of the page's client-side behaviors.
//!
//! The transitions themselves run in the page script
//! (`static/invitation.js`). The renderer only needs to know where each
//! behavior starts (loader showing, content hidden, menu closed, lightbox
//! empty) and which tunables to hand the script. [`RuntimeSettings`] is that
//! hand-off, serialized into the page as JSON.
//!
//! | Behavior | Starts as | Script transition |
//! |----------|-----------|-------------------|
//! | [`Loader`] | visible, content gated | visible → exiting → hidden, completion once |
//! | [`Reveal`] | not revealed | one-shot on first intersection past the margin |
//! | [`NavState`] | not scrolled, menu closed | compact past the threshold, select closes menu |
//! | [`Lightbox`] | closed | at most one item open |

use crate::config::SiteConfig;
use serde::Serialize;

// ============================================================================
// Loader
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderPhase {
    Visible,
    Exiting,
    Hidden,
}

impl LoaderPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            LoaderPhase::Visible => "visible",
            LoaderPhase::Exiting => "exiting",
            LoaderPhase::Hidden => "hidden",
        }
    }
}

/// The intro splash as rendered: showing, with its timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    display_ms: u32,
    exit_ms: u32,
    phase: LoaderPhase,
}

impl Loader {
    pub fn new(display_ms: u32, exit_ms: u32) -> Self {
        Self {
            display_ms,
            exit_ms,
            phase: LoaderPhase::Visible,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.loader.display_ms, config.loader.exit_ms)
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    /// Whether the gated content (navbar and sections) may be visible.
    pub fn content_visible(&self) -> bool {
        self.phase == LoaderPhase::Hidden
    }
}

// ============================================================================
// Reveal
// ============================================================================

/// One-shot scroll-triggered reveal.
///
/// `margin_px` shrinks the viewport on both edges, so an element reveals once
/// it is `margin_px` inside the viewport rather than at the first visible
/// pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    margin_px: u32,
}

impl Reveal {
    pub fn new(margin_px: u32) -> Self {
        Self { margin_px }
    }

    pub fn margin_px(&self) -> u32 {
        self.margin_px
    }
}

// ============================================================================
// Navbar
// ============================================================================

/// Navbar UI state: compact styling after scrolling, and the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    threshold: u32,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

// ============================================================================
// Lightbox
// ============================================================================

/// Which memory, if any, is shown enlarged. Pages always start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

// ============================================================================
// Settings handed to the page script
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeSettings {
    pub loader_display_ms: u32,
    pub loader_exit_ms: u32,
    pub scroll_threshold: u32,
}

impl RuntimeSettings {
    pub fn new(loader: &Loader, nav: &NavState) -> Self {
        Self {
            loader_display_ms: loader.display_ms,
            loader_exit_ms: loader.exit_ms,
            scroll_threshold: nav.threshold,
        }
    }

    /// JSON for the `application/json` settings block. `<` is escaped so the
    /// payload can never close its `<script>` element.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace('<', "\\u003c")
    }
}

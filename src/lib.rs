//! # Invitation
//!
//! A static site generator for single-page animated wedding invitations.
//! One document describes the couple and which sections to show; the build
//! renders a self-contained `index.html` with inline CSS and a small script,
//! and copies the photos beside it.
//!
//! # Architecture: Render Once, Animate in the Browser
//!
//! ```text
//! content/wedding.json ─┐
//! content/config.toml  ─┼─▶  load  ─▶  render (maud)  ─▶  dist/index.html
//! content/assets/      ─┘                                  dist/<assets>
//! ```
//!
//! Everything structural is decided at build time: which sections exist, their
//! order, the navbar entries, the dividers between sections, which card shape
//! each memory gets. The browser only runs timed and scroll-driven behavior:
//! the intro loader, particle placement, one-shot reveals, the navbar's
//! scrolled style and mobile menu, and the memories lightbox.
//!
//! [`runtime`] fixes where each behavior starts in the rendered markup. The
//! page script runs the transitions, reading its timings from a JSON block
//! the generator embeds, so a config change never requires editing
//! JavaScript. The browser tests drive that script in headless Chrome.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`wedding`] | The input document: typed sections, JSON/TOML loading, starter sample |
//! | [`sections`] | Fixed section order, anchors, nav labels, the enabled predicate |
//! | [`config`] | Build `config.toml`: palette, loader timing, particle counts, merging and validation |
//! | [`render`] | Maud components for every section plus page composition |
//! | [`runtime`] | Initial loader, reveal, navbar and lightbox state, and the settings handed to the page script |
//! | [`particles`] | Decorative particle recipes rendered as script-populated containers |
//! | [`assets`] | Asset reference resolution, missing-file checks, dimension probing, parallel copy |
//! | [`generate`] | Load → render → write pipeline |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## One Enabled Predicate
//!
//! A section is shown iff it is present and `enabled`. The navbar, the section
//! list and the divider count all derive from
//! [`sections::enabled_sections`], so a nav link can never point at a section
//! that was not rendered.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup
//! is a compile error and every interpolation is escaped, which matters for a
//! document full of user-entered names and captions.
//!
//! ## Missing Content Degrades, Never Fails
//!
//! Empty image references render a gradient fallback, an empty map URL drops
//! the map, an empty stream URL shows a placeholder. Only unreadable input
//! files and invalid config stop a build.

pub mod assets;
pub mod config;
pub mod generate;
pub mod output;
pub mod particles;
pub mod render;
pub mod runtime;
pub mod sections;
pub mod wedding;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Local asset handling.
//!
//! The document refers to images, clips and audio by opaque strings. Most are
//! site-root paths like `/images/hero.jpg` that the build serves from the
//! assets directory (`assets/` by default, copied verbatim to the output
//! root). This module resolves those references against the assets directory
//! for three jobs:
//!
//! - **Copy**: mirror the assets directory into the output, in parallel.
//! - **Check**: list references whose file is missing. Missing files are
//!   warnings, never errors: the page falls back to gradients.
//! - **Probe**: read the pixel dimensions of memory images so the grid can
//!   pick a card shape that matches the photo.
//!
//! Remote references (`https://…`, `//cdn…`, `data:`) are never resolved.

use crate::sections::SectionKind;
use crate::wedding::{MemoryKind, WeddingData};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Pixel dimensions keyed by the reference string used in the document.
pub type Dimensions = BTreeMap<String, (u32, u32)>;

/// Files that never make it into the output.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// A reference found in the document, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    /// Human-readable origin, e.g. `story.events[1].image`.
    pub label: String,
    pub reference: String,
}

/// Map a reference to a file under `assets_root`, or `None` for empty and
/// remote references.
pub fn resolve_reference(assets_root: &Path, reference: &str) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty()
        || reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("//")
        || reference.starts_with("data:")
    {
        return None;
    }
    // Drop query strings and fragments (`/a.mp4#t=5`)
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(assets_root.join(path))
}

/// Every non-empty asset reference in site info and enabled sections, in
/// document order.
pub fn referenced_assets(data: &WeddingData) -> Vec<AssetRef> {
    let mut refs = Vec::new();
    let mut push = |label: String, reference: &str| {
        if !reference.trim().is_empty() {
            refs.push(AssetRef {
                label,
                reference: reference.to_string(),
            });
        }
    };

    push("site.logo".into(), &data.site.logo);
    if let Some(music) = data.site.music() {
        push("site.backgroundMusic".into(), music);
    }

    for kind in SectionKind::ALL {
        if !kind.is_enabled(data) {
            continue;
        }
        match kind {
            SectionKind::Hero => {
                if let Some(hero) = &data.hero {
                    push("hero.backgroundImage".into(), &hero.background_image);
                    push("hero.brideImage".into(), &hero.bride_image);
                    push("hero.groomImage".into(), &hero.groom_image);
                }
            }
            SectionKind::Story => {
                if let Some(story) = &data.story {
                    push("story.groomSketch".into(), &story.groom_sketch);
                    push("story.brideSketch".into(), &story.bride_sketch);
                    for (idx, event) in story.events.iter().enumerate() {
                        push(format!("story.events[{idx}].image"), &event.image);
                    }
                    push("story.coupleImage".into(), &story.couple_image);
                }
            }
            SectionKind::Venue | SectionKind::Reception => {
                let venue = match kind {
                    SectionKind::Venue => data.venue.as_ref(),
                    _ => data.reception.as_ref(),
                };
                if let Some(venue) = venue {
                    push(format!("{}.image", kind.id()), &venue.image);
                }
            }
            SectionKind::Livestream => {}
            SectionKind::Memories => {
                if let Some(memories) = &data.memories {
                    for (idx, item) in memories.items.iter().enumerate() {
                        push(format!("memories.items[{idx}].src"), &item.src);
                    }
                }
            }
            SectionKind::Closing => {
                if let Some(closing) = &data.closing {
                    push("closing.backgroundImage".into(), &closing.background_image);
                }
            }
        }
    }
    refs
}

/// Local references whose file does not exist under `assets_root`.
pub fn missing_assets(data: &WeddingData, assets_root: &Path) -> Vec<AssetRef> {
    referenced_assets(data)
        .into_iter()
        .filter(|r| resolve_reference(assets_root, &r.reference).is_some_and(|p| !p.is_file()))
        .collect()
}

/// Read the dimensions of every local memory image.
///
/// Headers are decoded in parallel. Files that are missing or unreadable are
/// left out; the grid falls back to its default shapes for them.
pub fn probe_memory_dimensions(data: &WeddingData, assets_root: &Path) -> Dimensions {
    let Some(memories) = data.memories.as_ref().filter(|m| m.enabled) else {
        return Dimensions::new();
    };

    let candidates: Vec<(&str, PathBuf)> = memories
        .items
        .iter()
        .filter(|item| item.kind == MemoryKind::Image)
        .filter_map(|item| {
            resolve_reference(assets_root, &item.src).map(|path| (item.src.as_str(), path))
        })
        .collect();

    candidates
        .par_iter()
        .filter_map(|(reference, path)| {
            image::image_dimensions(path)
                .ok()
                .map(|dims| (reference.to_string(), dims))
        })
        .collect()
}

/// Copy everything under `src` into `dst`, preserving relative paths.
///
/// Returns the number of files copied. A missing source directory copies
/// nothing.
pub fn copy_assets(src: &Path, dst: &Path) -> Result<usize, AssetError> {
    if !src.is_dir() {
        return Ok(0);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            files.push((entry.into_path(), target));
        }
    }

    files
        .par_iter()
        .map(|(from, to)| fs::copy(from, to).map(|_| ()))
        .collect::<Result<Vec<()>, _>>()?;

    Ok(files.len())
}

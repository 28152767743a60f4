//! The wedding document: everything the page says about the couple.
//!
//! The document lives in the content root as `wedding.json` (preferred) or
//! `wedding.toml`. It has one required table, `site`, and seven optional
//! section tables. Keys are camelCase in both formats so a document can be
//! converted between them without renaming anything:
//!
//! ```json
//! {
//!   "site": { "coupleNames": "Priya & Arjun", "tagline": "Two souls, one journey" },
//!   "hero": { "enabled": true, "brideName": "Priya", "groomName": "Arjun" },
//!   "venue": { "enabled": true, "name": "The Leela Palace", "lat": 12.96, "lng": 77.64 }
//! }
//! ```
//!
//! ## Presence Rules
//!
//! Nothing is validated beyond presence. A missing section, a section without
//! `enabled`, and a section with `enabled = false` all mean the same thing: the
//! section is not rendered and has no navigation entry. Missing strings are
//! empty, missing coordinates are `0`, missing lists are empty. Renderers treat
//! empty strings as "omit this element" or "use the fallback gradient".
//!
//! Unknown keys are ignored. The document is content, often hand-edited or
//! exported from elsewhere, so extra keys are not worth failing a build over.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names probed in the content root, in priority order.
pub const DOCUMENT_NAMES: &[&str] = &["wedding.json", "wedding.toml"];

#[derive(Error, Debug)]
pub enum WeddingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("No wedding.json or wedding.toml found in {0}")]
    NotFound(PathBuf),
}

/// The root document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeddingData {
    pub site: SiteInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<StoryData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueData>,
    /// Second location, same shape as [`WeddingData::venue`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reception: Option<VenueData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub livestream: Option<LivestreamData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memories: Option<MemoriesData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<ClosingData>,
}

/// Site-wide facts used by the loader, navbar, footer and page head.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteInfo {
    /// Display form of both names, e.g. `"Priya & Arjun"`.
    pub couple_names: String,
    pub tagline: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub logo: String,
    /// Optional looping soundtrack. Absent or empty renders no player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_music: Option<String>,
}

impl SiteInfo {
    /// Monogram shown in the loader ring: the first letter of each
    /// `&`-separated name, joined with `" & "`.
    ///
    /// `"Priya & Arjun"` → `"P & A"`. Blank parts are skipped rather than
    /// producing a dangling ampersand.
    pub fn monogram(&self) -> String {
        self.couple_names
            .split('&')
            .filter_map(|name| name.trim().chars().next())
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" & ")
    }

    /// Background music reference, if one is configured and non-empty.
    pub fn music(&self) -> Option<&str> {
        self.background_music
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroData {
    pub enabled: bool,
    pub background_image: String,
    pub bride_image: String,
    pub groom_image: String,
    pub save_the_date: String,
    pub bride_name: String,
    pub groom_name: String,
    pub date: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryData {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub bride_sketch: String,
    pub groom_sketch: String,
    pub couple_image: String,
    /// Chronological; rendered in the order given.
    pub events: Vec<StoryEvent>,
}

/// One point on the story timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryEvent {
    pub year: String,
    pub title: String,
    /// Inline markdown.
    pub description: String,
    pub image: String,
}

/// A location card. Used twice: once for the ceremony venue, once for the
/// reception.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VenueData {
    pub enabled: bool,
    pub section_title: String,
    pub name: String,
    pub address: String,
    pub date: String,
    pub time: String,
    pub image: String,
    pub map_embed_url: String,
    pub lat: f64,
    pub lng: f64,
}

impl VenueData {
    /// External directions link built from the venue coordinates.
    ///
    /// Coordinates use `f64`'s shortest round-trip formatting, so `12.34`
    /// stays `12.34` and `12.0` becomes `12`.
    pub fn directions_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LivestreamData {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    /// Embed URL. Empty until the stream is scheduled.
    pub stream_url: String,
    pub date: String,
    pub time: String,
}

impl LivestreamData {
    /// The embed URL, or `None` when the placeholder should be shown.
    pub fn stream(&self) -> Option<&str> {
        Some(self.stream_url.trim()).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoriesData {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<MemoryItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryItem {
    #[serde(rename = "type")]
    pub kind: MemoryKind,
    pub src: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClosingData {
    pub enabled: bool,
    pub title: String,
    /// Inline markdown, rendered inside typographic quotes.
    pub message: String,
    pub background_image: String,
    pub couple_names: String,
}

/// Parse a wedding document from a string, choosing the format by extension.
///
/// Anything other than a `.toml` extension is parsed as JSON.
pub fn parse_document(content: &str, path: &Path) -> Result<WeddingData, WeddingError> {
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        Ok(toml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

/// Find the wedding document in a content root.
///
/// `wedding.json` wins over `wedding.toml` when both exist.
pub fn find_document(root: &Path) -> Result<PathBuf, WeddingError> {
    DOCUMENT_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| WeddingError::NotFound(root.to_path_buf()))
}

/// Load the wedding document from a content root, returning the file it came
/// from alongside the parsed data.
pub fn load_wedding(root: &Path) -> Result<(PathBuf, WeddingData), WeddingError> {
    let path = find_document(root)?;
    let content = fs::read_to_string(&path)?;
    let data = parse_document(&content, &path)?;
    Ok((path, data))
}

/// A starter document with every section enabled, printed by `invitation sample`.
pub fn sample_document() -> &'static str {
    r#"{
  "site": {
    "coupleNames": "Priya & Arjun",
    "tagline": "Two souls, one journey",
    "date": "14 February 2027",
    "time": "7:00 PM",
    "location": "Bengaluru, India",
    "logo": "/images/logo.png"
  },
  "hero": {
    "enabled": true,
    "backgroundImage": "/images/hero.jpg",
    "brideImage": "/images/bride.jpg",
    "groomImage": "/images/groom.jpg",
    "saveTheDate": "Save the Date",
    "brideName": "Priya",
    "groomName": "Arjun",
    "date": "14 . 02 . 2027",
    "location": "Bengaluru, India"
  },
  "story": {
    "enabled": true,
    "title": "Our Story",
    "subtitle": "How it all began",
    "brideSketch": "/images/bride-sketch.png",
    "groomSketch": "/images/groom-sketch.png",
    "coupleImage": "/images/couple.jpg",
    "events": [
      { "year": "2019", "title": "First Meeting", "description": "A rainy afternoon in a *crowded* bookshop.", "image": "/images/story-1.jpg" },
      { "year": "2022", "title": "The Proposal", "description": "Under the lanterns at Nandi Hills.", "image": "/images/story-2.jpg" }
    ]
  },
  "venue": {
    "enabled": true,
    "sectionTitle": "The Wedding",
    "name": "The Leela Palace",
    "address": "23 Old Airport Road, Bengaluru",
    "date": "14 February 2027",
    "time": "7:00 PM",
    "image": "/images/venue.jpg",
    "mapEmbedUrl": "https://www.google.com/maps/embed?pb=venue",
    "lat": 12.9606,
    "lng": 77.6484
  },
  "reception": {
    "enabled": true,
    "sectionTitle": "The Reception",
    "name": "Taj West End",
    "address": "25 Race Course Road, Bengaluru",
    "date": "15 February 2027",
    "time": "8:00 PM",
    "image": "/images/reception.jpg",
    "mapEmbedUrl": "https://www.google.com/maps/embed?pb=reception",
    "lat": 12.9833,
    "lng": 77.5833
  },
  "livestream": {
    "enabled": true,
    "title": "Watch Live",
    "subtitle": "Join us from wherever you are",
    "streamUrl": "",
    "date": "14 February 2027",
    "time": "7:00 PM IST"
  },
  "memories": {
    "enabled": true,
    "title": "Memories",
    "subtitle": "Moments we treasure",
    "items": [
      { "type": "image", "src": "/images/memory-1.jpg", "caption": "Engagement" },
      { "type": "image", "src": "/images/memory-2.jpg", "caption": "Haldi" },
      { "type": "video", "src": "/videos/sangeet.mp4", "caption": "Sangeet night" }
    ]
  },
  "closing": {
    "enabled": true,
    "title": "With Love",
    "message": "Your presence is the greatest gift of all",
    "backgroundImage": "/images/closing.jpg",
    "coupleNames": "Priya & Arjun"
  }
}
"#
}

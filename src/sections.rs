//! The fixed section sequence and the one predicate that gates it.
//!
//! Navigation and page composition both fold over [`SectionKind::ALL`] and
//! keep the kinds for which [`SectionKind::is_enabled`] holds. Neither has its
//! own per-section conditionals, so the navbar can never link to a section
//! the page did not render, and the page can never render a section the
//! navbar does not list.

use crate::wedding::WeddingData;
use serde::Serialize;

/// A named, independently toggleable block of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Story,
    Venue,
    Reception,
    Livestream,
    Memories,
    Closing,
}

impl SectionKind {
    /// Every section, in the order the page renders them.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::Story,
        SectionKind::Venue,
        SectionKind::Reception,
        SectionKind::Livestream,
        SectionKind::Memories,
        SectionKind::Closing,
    ];

    /// Element id of the rendered `<section>`; also the nav anchor without `#`.
    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Story => "story",
            SectionKind::Venue => "venue",
            SectionKind::Reception => "reception",
            SectionKind::Livestream => "livestream",
            SectionKind::Memories => "memories",
            SectionKind::Closing => "closing",
        }
    }

    /// In-page anchor, e.g. `#story`.
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Hero => "Home",
            SectionKind::Story => "Our Story",
            SectionKind::Venue => "Venue",
            SectionKind::Reception => "Reception",
            SectionKind::Livestream => "Live",
            SectionKind::Memories => "Memories",
            SectionKind::Closing => "RSVP",
        }
    }

    /// The single enabled test. Absent section or absent flag means disabled.
    pub fn is_enabled(self, data: &WeddingData) -> bool {
        match self {
            SectionKind::Hero => data.hero.as_ref().is_some_and(|s| s.enabled),
            SectionKind::Story => data.story.as_ref().is_some_and(|s| s.enabled),
            SectionKind::Venue => data.venue.as_ref().is_some_and(|s| s.enabled),
            SectionKind::Reception => data.reception.as_ref().is_some_and(|s| s.enabled),
            SectionKind::Livestream => data.livestream.as_ref().is_some_and(|s| s.enabled),
            SectionKind::Memories => data.memories.as_ref().is_some_and(|s| s.enabled),
            SectionKind::Closing => data.closing.as_ref().is_some_and(|s| s.enabled),
        }
    }
}

/// One navbar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: String,
}

/// Enabled sections in page order.
pub fn enabled_sections(data: &WeddingData) -> Vec<SectionKind> {
    SectionKind::ALL
        .into_iter()
        .filter(|kind| kind.is_enabled(data))
        .collect()
}

/// Navbar entries, one per enabled section.
pub fn nav_items(data: &WeddingData) -> Vec<NavItem> {
    enabled_sections(data)
        .into_iter()
        .map(|kind| NavItem {
            label: kind.label(),
            href: kind.anchor(),
        })
        .collect()
}

/// Number of dividers between `shown` consecutive sections.
pub fn divider_count(shown: usize) -> usize {
    shown.saturating_sub(1)
}

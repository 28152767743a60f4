//! Shared test utilities for the invitation test suite.
//!
//! Provides document builders and small HTML probes that work on rendered
//! markup without pulling in a parser.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! // Bit i enables SectionKind::ALL[i]: hero + venue + closing
//! let data = wedding_with_mask(0b100_0101);
//! let html = render_page(&data);
//!
//! assert_eq!(nav_hrefs(&html), ["#hero", "#venue", "#closing"]);
//! assert_eq!(count_dividers(&html), 2);
//! ```

use crate::sections::SectionKind;
use crate::wedding::*;

// =========================================================================
// Document builders
// =========================================================================

/// A document with only `site` filled in and no sections.
pub fn bare_wedding(names: &str) -> WeddingData {
    WeddingData {
        site: SiteInfo {
            couple_names: names.to_string(),
            tagline: "Two souls, one journey".to_string(),
            date: "14 February 2027".to_string(),
            time: "7:00 PM".to_string(),
            location: "Bengaluru".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A document with every section present and enabled.
pub fn full_wedding() -> WeddingData {
    let mut data = bare_wedding("Priya & Arjun");
    data.hero = Some(HeroData {
        enabled: true,
        background_image: "/images/hero.jpg".to_string(),
        save_the_date: "Save the Date".to_string(),
        bride_name: "Priya".to_string(),
        groom_name: "Arjun".to_string(),
        date: "14 . 02 . 2027".to_string(),
        location: "Bengaluru, India".to_string(),
        ..Default::default()
    });
    data.story = Some(StoryData {
        enabled: true,
        title: "Our Story".to_string(),
        subtitle: "How it all began".to_string(),
        couple_image: "/images/couple.jpg".to_string(),
        events: vec![
            story_event("2019", "First Meeting"),
            story_event("2021", "First Trip"),
            story_event("2022", "The Proposal"),
        ],
        ..Default::default()
    });
    data.venue = Some(venue("The Wedding", "The Leela Palace", 12.96, 77.64));
    data.reception = Some(venue("The Reception", "Taj West End", 12.98, 77.58));
    data.livestream = Some(LivestreamData {
        enabled: true,
        title: "Watch Live".to_string(),
        subtitle: "Join us from anywhere".to_string(),
        stream_url: String::new(),
        date: "14 February 2027".to_string(),
        time: "7:00 PM".to_string(),
    });
    data.memories = Some(MemoriesData {
        enabled: true,
        title: "Memories".to_string(),
        subtitle: "Moments we treasure".to_string(),
        items: vec![
            memory(MemoryKind::Image, "/images/m1.jpg", "Engagement"),
            memory(MemoryKind::Image, "/images/m2.jpg", "Haldi"),
            memory(MemoryKind::Video, "/videos/sangeet.mp4", "Sangeet"),
            memory(MemoryKind::Image, "/images/m4.jpg", "Mehendi"),
            memory(MemoryKind::Image, "/images/m5.jpg", "Baraat"),
        ],
    });
    data.closing = Some(ClosingData {
        enabled: true,
        title: "With Love".to_string(),
        message: "Your presence is the greatest gift".to_string(),
        background_image: "/images/closing.jpg".to_string(),
        couple_names: "Priya & Arjun".to_string(),
    });
    data
}

/// [`full_wedding`] with `enabled` set from a bitmask over
/// [`SectionKind::ALL`] (bit 0 = hero … bit 6 = closing).
pub fn wedding_with_mask(mask: u32) -> WeddingData {
    let mut data = full_wedding();
    for (bit, kind) in SectionKind::ALL.iter().enumerate() {
        let on = mask & (1 << bit) != 0;
        match kind {
            SectionKind::Hero => data.hero.as_mut().unwrap().enabled = on,
            SectionKind::Story => data.story.as_mut().unwrap().enabled = on,
            SectionKind::Venue => data.venue.as_mut().unwrap().enabled = on,
            SectionKind::Reception => data.reception.as_mut().unwrap().enabled = on,
            SectionKind::Livestream => data.livestream.as_mut().unwrap().enabled = on,
            SectionKind::Memories => data.memories.as_mut().unwrap().enabled = on,
            SectionKind::Closing => data.closing.as_mut().unwrap().enabled = on,
        }
    }
    data
}

pub fn story_event(year: &str, title: &str) -> StoryEvent {
    StoryEvent {
        year: year.to_string(),
        title: title.to_string(),
        description: format!("What happened in {year}."),
        image: format!("/images/story-{year}.jpg"),
    }
}

pub fn venue(section_title: &str, name: &str, lat: f64, lng: f64) -> VenueData {
    VenueData {
        enabled: true,
        section_title: section_title.to_string(),
        name: name.to_string(),
        address: "Old Airport Road, Bengaluru".to_string(),
        date: "14 February 2027".to_string(),
        time: "7:00 PM".to_string(),
        image: "/images/venue.jpg".to_string(),
        map_embed_url: "https://www.google.com/maps/embed?pb=x".to_string(),
        lat,
        lng,
    }
}

pub fn memory(kind: MemoryKind, src: &str, caption: &str) -> MemoryItem {
    MemoryItem {
        kind,
        src: src.to_string(),
        caption: caption.to_string(),
    }
}

/// Render a full page with stock config and no probed dimensions.
pub fn render_page(data: &WeddingData) -> String {
    let config = crate::config::SiteConfig::default();
    let dims = crate::assets::Dimensions::new();
    let ctx = crate::render::RenderContext {
        config: &config,
        dimensions: &dims,
    };
    crate::render::compose_page(data, &ctx, "", "").into_string()
}

// =========================================================================
// HTML queries
// =========================================================================

/// Every opening tag `<name …>` in document order, including the brackets.
pub fn tags<'a>(html: &'a str, name: &str) -> Vec<&'a str> {
    let open = format!("<{name}");
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&open) {
        let after = &rest[start + open.len()..];
        // Reject prefixes of longer tag names (<a vs <audio)
        if after.starts_with([' ', '>', '/']) {
            let end = after
                .find('>')
                .map(|i| start + open.len() + i + 1)
                .unwrap_or(rest.len());
            found.push(&rest[start..end]);
            rest = &rest[end..];
        } else {
            rest = &rest[start + open.len()..];
        }
    }
    found
}

/// Value of attribute `name` in an opening tag.
pub fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {name}=\"");
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

pub fn has_class(tag: &str, class: &str) -> bool {
    attr(tag, "class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
}

/// Opening tags of element `name` carrying `class`.
pub fn tags_with_class<'a>(html: &'a str, name: &str, class: &str) -> Vec<&'a str> {
    tags(html, name)
        .into_iter()
        .filter(|t| has_class(t, class))
        .collect()
}

/// The first opening tag of element `name` carrying `class`. Panics if absent.
pub fn tag_with_class<'a>(html: &'a str, name: &str, class: &str) -> &'a str {
    tags_with_class(html, name, class)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no <{name} class=\"{class}\"> in output"))
}

/// Text directly after an opening tag, up to the next tag.
pub fn text_after<'a>(html: &'a str, tag: &str) -> &'a str {
    let start = html.find(tag).map(|i| i + tag.len()).unwrap_or(html.len());
    let end = html[start..].find('<').map(|i| start + i).unwrap_or(html.len());
    &html[start..end]
}

/// Desktop navbar hrefs in order.
pub fn nav_hrefs(html: &str) -> Vec<&str> {
    tags_with_class(html, "a", "nav-link")
        .into_iter()
        .filter_map(|t| attr(t, "href"))
        .collect()
}

/// Mobile menu hrefs in order.
pub fn mobile_hrefs(html: &str) -> Vec<&str> {
    tags_with_class(html, "a", "mobile-link")
        .into_iter()
        .filter_map(|t| attr(t, "href"))
        .collect()
}

/// Desktop navbar labels in order.
pub fn nav_labels(html: &str) -> Vec<&str> {
    tags_with_class(html, "a", "nav-link")
        .into_iter()
        .map(|t| text_after(html, t))
        .collect()
}

/// Ids of rendered `<section>` elements in order.
pub fn section_ids(html: &str) -> Vec<&str> {
    tags(html, "section")
        .into_iter()
        .filter_map(|t| attr(t, "id"))
        .collect()
}

/// Dividers placed between sections.
pub fn count_dividers(html: &str) -> usize {
    tags_with_class(html, "div", "section-divider").len()
}

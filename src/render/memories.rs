//! `#memories`: masonry grid of photos and clips with a single lightbox.
//!
//! Card shapes come from [`AspectClass`]. When the build probed a local image
//! its real proportions pick the nearest shape; otherwise the shape cycles by
//! index so the columns stay uneven.
//!
//! The lightbox is rendered once per grid and starts closed. Cards carry
//! everything the script needs to fill it (`data-src`, `data-kind`,
//! `data-caption`), so opening item *i* replaces whatever was shown before.

use super::{RenderContext, delay_style, flag, image_layer, section_heading};
use crate::runtime::{Lightbox, Reveal};
use crate::sections::SectionKind;
use crate::wedding::{MemoriesData, MemoryItem, MemoryKind};
use maud::{Markup, html};

const MARGIN_PX: u32 = 50;
const CARD_MARGIN_PX: u32 = 50;
const CARD_STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    /// 3:4
    Portrait,
    /// 1:1
    Square,
    /// 4:3
    Landscape,
}

impl AspectClass {
    const CYCLE: [AspectClass; 4] = [
        AspectClass::Portrait,
        AspectClass::Square,
        AspectClass::Landscape,
        AspectClass::Portrait,
    ];

    /// Shape used when the real dimensions are unknown.
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    /// The shape whose width/height ratio is closest to the image's.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let ratio = width as f64 / height as f64;
        [
            AspectClass::Portrait,
            AspectClass::Square,
            AspectClass::Landscape,
        ]
        .into_iter()
        .min_by(|a, b| {
            let da = (a.ratio() - ratio).abs();
            let db = (b.ratio() - ratio).abs();
            da.total_cmp(&db)
        })
    }

    fn ratio(self) -> f64 {
        match self {
            AspectClass::Portrait => 3.0 / 4.0,
            AspectClass::Square => 1.0,
            AspectClass::Landscape => 4.0 / 3.0,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            AspectClass::Portrait => "aspect-portrait",
            AspectClass::Square => "aspect-square",
            AspectClass::Landscape => "aspect-landscape",
        }
    }
}

fn aspect_for(item: &MemoryItem, index: usize, ctx: &RenderContext) -> AspectClass {
    ctx.dimensions
        .get(&item.src)
        .and_then(|&(w, h)| AspectClass::from_dimensions(w, h))
        .unwrap_or_else(|| AspectClass::for_index(index))
}

pub fn render_memories(memories: Option<&MemoriesData>, ctx: &RenderContext) -> Option<Markup> {
    let memories = memories.filter(|m| m.enabled)?;
    let reveal = Reveal::new(MARGIN_PX);
    let lightbox = Lightbox::default();

    Some(html! {
        section id=(SectionKind::Memories.id()) class="memories" data-reveal=(reveal.margin_px()) {
            div.container.wide {
                (section_heading(&memories.subtitle, &memories.title, None))
                div.memory-grid {
                    @for (idx, item) in memories.items.iter().enumerate() {
                        (render_card(item, idx, aspect_for(item, idx, ctx)))
                    }
                }
            }
            (render_lightbox(&lightbox))
        }
    })
}

fn render_card(item: &MemoryItem, index: usize, aspect: AspectClass) -> Markup {
    let reveal = Reveal::new(CARD_MARGIN_PX);
    let delay = (index % 4) as u32 * CARD_STAGGER_MS;
    let kind = match item.kind {
        MemoryKind::Image => "image",
        MemoryKind::Video => "video",
    };
    html! {
        div class={ "memory-card " (aspect.class()) } role="button" tabindex="0"
            style=(delay_style(delay))
            data-reveal=(reveal.margin_px())
            data-memory-index=(index)
            data-src=(item.src)
            data-kind=(kind)
            data-caption=(item.caption)
            aria-label=(item.caption) {
            @match item.kind {
                MemoryKind::Image => {
                    (image_layer("memory-media", &item.src))
                }
                MemoryKind::Video => {
                    video.memory-media src=(item.src) muted playsinline preload="metadata" {}
                    span.memory-play aria-hidden="true" { "▶" }
                }
            }
            div.memory-tint {}
            div.memory-overlay {
                p.memory-caption { (item.caption) }
            }
            div.memory-border {}
        }
    }
}

fn render_lightbox(state: &Lightbox) -> Markup {
    html! {
        div.lightbox id="lightbox" role="dialog" aria-modal="true" aria-label="Memory viewer"
            data-lightbox data-open=(flag(state.is_open())) hidden[!state.is_open()] {
            div.lightbox-content data-lightbox-content {
                div.lightbox-media data-lightbox-media {}
                p.lightbox-caption data-lightbox-caption {}
                button.lightbox-close type="button" aria-label="Close" data-lightbox-close { "✕" }
            }
        }
    }
}

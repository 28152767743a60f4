//! HTML rendering.
//!
//! Every component is a function from its slice of the document to
//! [`Markup`]. Section renderers return `Option<Markup>`: `None` for an
//! absent or disabled section, so the caller never has to emit an empty
//! container.
//!
//! | Module | Renders |
//! |--------|---------|
//! | [`loader`] | Intro splash with monogram and bokeh |
//! | [`navbar`] | Fixed bar, desktop links, mobile overlay menu |
//! | [`hero`] | `#hero` |
//! | [`story`] | `#story` timeline |
//! | [`venue`] | `#venue` and `#reception` |
//! | [`livestream`] | `#livestream` |
//! | [`memories`] | `#memories` grid and lightbox |
//! | [`closing`] | `#closing` |
//!
//! [`compose_page`] stitches them together in the fixed section order.
//!
//! ## Reveal Markup
//!
//! A revealable element carries `data-reveal="<margin px>"`. The page script
//! adds `is-revealed` the first time the element enters the viewport (shrunk
//! by the margin) and stops observing it. Children opt into the entrance with
//! `.reveal-item` and a `--delay` custom property; the CSS keys their
//! transition off the nearest revealed ancestor.

pub mod closing;
pub mod hero;
pub mod livestream;
pub mod loader;
pub mod memories;
pub mod navbar;
pub mod story;
pub mod venue;

use crate::assets::Dimensions;
use crate::config::SiteConfig;
use crate::runtime::{Loader, NavState, RuntimeSettings};
use crate::sections::{SectionKind, enabled_sections};
use crate::wedding::WeddingData;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Without scripting the loader never completes and nothing is revealed, so
/// the gate and every entrance start state are overridden.
const NOSCRIPT_CSS: &str = "#content[hidden]{display:block!important}\
#loader{display:none!important}\
.reveal-item,.memory-card[data-reveal]{opacity:1!important;transform:none!important}";

/// Everything a renderer may need beyond its own section data.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    /// Pixel dimensions of local images, keyed by document reference.
    pub dimensions: &'a Dimensions,
}

/// Render one section, or `None` if it is absent or disabled.
pub fn render_section(kind: SectionKind, data: &WeddingData, ctx: &RenderContext) -> Option<Markup> {
    match kind {
        SectionKind::Hero => hero::render_hero(data.hero.as_ref(), ctx),
        SectionKind::Story => story::render_story(data.story.as_ref()),
        SectionKind::Venue => venue::render_venue(data.venue.as_ref(), kind.id()),
        SectionKind::Reception => venue::render_venue(data.reception.as_ref(), kind.id()),
        SectionKind::Livestream => livestream::render_livestream(data.livestream.as_ref()),
        SectionKind::Memories => memories::render_memories(data.memories.as_ref(), ctx),
        SectionKind::Closing => closing::render_closing(data.closing.as_ref(), ctx),
    }
}

/// Render the enabled sections in order with one divider between each
/// consecutive pair.
pub fn render_main(data: &WeddingData, ctx: &RenderContext) -> Markup {
    let rendered: Vec<Markup> = enabled_sections(data)
        .into_iter()
        .filter_map(|kind| render_section(kind, data, ctx))
        .collect();

    html! {
        main {
            @for (idx, section) in rendered.into_iter().enumerate() {
                @if idx > 0 {
                    div.section-divider role="separator" {}
                }
                (section)
            }
        }
    }
}

/// Render the whole page.
///
/// The loader is always present. Navbar, sections and footer sit in a wrapper
/// that starts `hidden` because the loader has not completed yet; the page
/// script removes the attribute when the loader's completion fires.
pub fn compose_page(data: &WeddingData, ctx: &RenderContext, css: &str, js: &str) -> Markup {
    let loader = Loader::from_config(ctx.config);
    let nav_state = NavState::new(ctx.config.navbar.scroll_threshold);
    let settings = RuntimeSettings::new(&loader, &nav_state);
    let bokeh = crate::particles::BOKEH.with_count(ctx.config.particles.bokeh);

    let content = html! {
        (loader::render_loader(&data.site, &loader, &bokeh))
        div id="content" class="page-content" data-loader-gated hidden[!loader.content_visible()] {
            (navbar::render_navbar(data, &nav_state))
            (render_main(data, ctx))
            (render_footer(data))
            (render_music(data))
        }
        noscript {
            style { (PreEscaped(NOSCRIPT_CSS)) }
        }
        script id="invitation-runtime" type="application/json" {
            (PreEscaped(settings.to_json()))
        }
        script { (PreEscaped(js)) }
    };

    base_document(data, &ctx.config.lang, css, content)
}

/// Renders the base HTML document structure.
fn base_document(data: &WeddingData, lang: &str, css: &str, content: Markup) -> Markup {
    let names = data.site.couple_names.as_str();
    let title = if names.is_empty() {
        "Wedding Invitation".to_string()
    } else {
        format!("{names} | Wedding Invitation")
    };
    let description = format!("Join us in celebrating the union of {names}.");
    let logo = non_empty(&data.site.logo);

    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                meta property="og:title" content=(title);
                meta property="og:description" content="You are cordially invited to celebrate our union.";
                meta property="og:type" content="website";
                @if let Some(logo) = logo {
                    link rel="icon" href=(logo);
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn render_footer(data: &WeddingData) -> Markup {
    html! {
        footer.site-footer {
            p { "Made with ❤ for " (data.site.couple_names) }
        }
    }
}

/// Looping soundtrack with a play/pause toggle. Browsers block autoplay, so
/// playback starts on the first press.
fn render_music(data: &WeddingData) -> Markup {
    html! {
        @if let Some(src) = data.site.music() {
            audio id="background-music" src=(src) loop preload="none" {}
            button.music-toggle type="button" aria-label="Play music" aria-pressed="false" data-music-toggle {
                "♪"
            }
        }
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// `Some(trimmed)` if the string has content.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    Some(s.trim()).filter(|s| !s.is_empty())
}

/// Inline `background-image` style for an asset reference, or `None` when the
/// reference is empty and the element should show its fallback gradient.
pub(crate) fn background_style(url: &str) -> Option<String> {
    non_empty(url).map(|url| {
        let escaped: String = url
            .chars()
            .filter(|c| !c.is_control())
            .flat_map(|c| match c {
                '\\' | '\'' => vec!['\\', c],
                _ => vec![c],
            })
            .collect();
        format!("background-image: url('{escaped}')")
    })
}

/// A cover-sized image layer. Empty references get the `has-fallback` class
/// instead of an image, and the stylesheet paints a gradient.
pub(crate) fn image_layer(class: &str, url: &str) -> Markup {
    let style = background_style(url);
    let class = if style.is_some() {
        class.to_string()
    } else {
        format!("{class} has-fallback")
    };
    html! {
        div class=(class) style=[style] {}
    }
}

/// `"true"` / `"false"` for data and ARIA attributes.
pub(crate) fn flag(on: bool) -> &'static str {
    if on { "true" } else { "false" }
}

/// CSS custom property for staggered entrances.
pub(crate) fn delay_style(ms: u32) -> String {
    format!("--delay: {ms}ms")
}

/// Render inline markdown, dropping the paragraph wrapper so the result can
/// sit inside an existing `<p>`.
pub(crate) fn inline_markdown(text: &str) -> PreEscaped<String> {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    let trimmed = out.trim_end();
    let inner = trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|s| !s.contains("<p>"))
        .unwrap_or(trimmed);
    PreEscaped(inner.to_string())
}

/// Section title block shared by story, venue, livestream and memories.
pub(crate) fn section_heading(eyebrow: &str, title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        header.section-heading {
            @if let Some(eyebrow) = non_empty(eyebrow) {
                p.eyebrow.reveal-item style=(delay_style(0)) { (eyebrow) }
            }
            @if let Some(title) = non_empty(title) {
                h2.script-title.reveal-item style=(delay_style(200)) { (title) }
            }
            @if let Some(subtitle) = subtitle.and_then(non_empty) {
                p.section-subtitle.reveal-item style=(delay_style(400)) { (subtitle) }
            }
            div.heading-rule {}
        }
    }
}

/// `"date • time"`, skipping whichever half is empty.
pub(crate) fn date_line(date: &str, time: &str) -> String {
    [date, time]
        .into_iter()
        .filter_map(non_empty)
        .collect::<Vec<_>>()
        .join(" • ")
}

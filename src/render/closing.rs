//! `#closing`: the farewell message over a photo with drifting sparkles.

use super::{RenderContext, delay_style, image_layer, inline_markdown, non_empty};
use crate::particles::SPARKLES;
use crate::runtime::Reveal;
use crate::sections::SectionKind;
use crate::wedding::ClosingData;
use maud::{Markup, html};

const MARGIN_PX: u32 = 80;

pub fn render_closing(closing: Option<&ClosingData>, ctx: &RenderContext) -> Option<Markup> {
    let closing = closing.filter(|c| c.enabled)?;
    let reveal = Reveal::new(MARGIN_PX);
    let sparkles = SPARKLES.with_count(ctx.config.particles.sparkles);

    Some(html! {
        section id=(SectionKind::Closing.id()) class="closing" data-reveal=(reveal.margin_px()) {
            (image_layer("closing-bg", &closing.background_image))
            div.closing-shade {}
            (sparkles.render())

            div.closing-content {
                div.ornament.reveal-item style=(delay_style(0)) {
                    span.ornament-line {}
                    span.ornament-stars { "✦" }
                    span.ornament-line {}
                }
                h2.closing-title.script-title.reveal-item style=(delay_style(200)) { (closing.title) }
                @if non_empty(&closing.message).is_some() {
                    div.closing-message.reveal-item style=(delay_style(400)) {
                        "“" (inline_markdown(closing.message.trim())) "”"
                    }
                }
                @if let Some(names) = non_empty(&closing.couple_names) {
                    p.closing-names.reveal-item style=(delay_style(600)) { (names) }
                }
                div.ornament.reveal-item style=(delay_style(800)) {
                    span.ornament-line {}
                    span.ornament-heart { "❤" }
                    span.ornament-line {}
                }
            }
        }
    })
}

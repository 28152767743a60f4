//! `#hero`: full-viewport opening with the couple's names over a background
//! photo, falling petals and glow specks.

use super::{RenderContext, delay_style, image_layer, non_empty};
use crate::particles::{GLOW, PETALS};
use crate::runtime::Reveal;
use crate::sections::SectionKind;
use crate::wedding::HeroData;
use maud::{Markup, html};

pub fn render_hero(hero: Option<&HeroData>, ctx: &RenderContext) -> Option<Markup> {
    let hero = hero.filter(|h| h.enabled)?;
    // Already in view on load; zero margin reveals it on the first observation.
    let reveal = Reveal::new(0);
    let petals = PETALS.with_count(ctx.config.particles.petals);
    let glow = GLOW.with_count(ctx.config.particles.glow);

    Some(html! {
        section id=(SectionKind::Hero.id()) class="hero" data-reveal=(reveal.margin_px()) {
            (image_layer("hero-bg", &hero.background_image))
            div.hero-shade {}
            (petals.render())
            (glow.render())

            div.hero-content {
                div.ornament.reveal-item style=(delay_style(200)) {
                    span.ornament-line {}
                    span.ornament-stars { "✦ ✦ ✦" }
                    span.ornament-line {}
                }
                @if let Some(line) = non_empty(&hero.save_the_date) {
                    p.save-the-date.reveal-item style=(delay_style(400)) { (line) }
                }
                h1.hero-name.reveal-item style=(delay_style(600)) { (hero.bride_name) }
                div.hero-amp.reveal-item style=(delay_style(1000)) {
                    span.ornament-line {}
                    span { "&" }
                    span.ornament-line {}
                }
                h1.hero-name.reveal-item style=(delay_style(800)) { (hero.groom_name) }
                div.hero-details.reveal-item style=(delay_style(1200)) {
                    @if let Some(date) = non_empty(&hero.date) {
                        p.hero-date { (date) }
                    }
                    @if let Some(location) = non_empty(&hero.location) {
                        p.hero-location { (location) }
                    }
                }
                div.scroll-indicator.reveal-item style=(delay_style(2000)) aria-hidden="true" {
                    div.scroll-mouse { div.scroll-dot {} }
                    p { "Scroll" }
                }
            }
            div.hero-fade {}
        }
    })
}

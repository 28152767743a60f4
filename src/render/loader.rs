//! Intro splash: bokeh field, mandala ring with the couple's monogram, names,
//! tagline and a progress bar that fills during the last second.

use super::{delay_style, non_empty};
use crate::particles::ParticleField;
use crate::runtime::Loader;
use crate::wedding::SiteInfo;
use maud::{Markup, html};

pub fn render_loader(site: &SiteInfo, loader: &Loader, bokeh: &ParticleField) -> Markup {
    let monogram = site.monogram();
    html! {
        div.loader id="loader" data-phase=(loader.phase().as_str()) role="status" aria-label="Loading invitation" {
            (bokeh.render())
            div.loader-inner {
                div.mandala-ring {
                    div.mandala-inner {
                        @if !monogram.is_empty() {
                            span.monogram { (monogram) }
                        }
                    }
                }
                h1.loader-names style=(delay_style(1200)) { (site.couple_names) }
                @if let Some(tagline) = non_empty(&site.tagline) {
                    p.loader-tagline style=(delay_style(1800)) { (tagline) }
                }
                div.loader-bar style=(delay_style(2000)) {
                    div.loader-bar-fill {}
                }
            }
        }
    }
}

//! `#livestream`: embedded stream, or a placeholder until a URL is set.

use super::{date_line, delay_style, section_heading};
use crate::runtime::Reveal;
use crate::sections::SectionKind;
use crate::wedding::LivestreamData;
use maud::{Markup, html};

const MARGIN_PX: u32 = 80;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

pub fn render_livestream(live: Option<&LivestreamData>) -> Option<Markup> {
    let live = live.filter(|l| l.enabled)?;
    let reveal = Reveal::new(MARGIN_PX);

    Some(html! {
        section id=(SectionKind::Livestream.id()) class="livestream" data-reveal=(reveal.margin_px()) {
            div.container.narrow {
                (section_heading(&date_line(&live.date, &live.time), &live.title, Some(&live.subtitle)))

                div.stream-card.glass-card.reveal-item style=(delay_style(400)) {
                    span.corner.corner-tl {}
                    span.corner.corner-tr {}
                    span.corner.corner-bl {}
                    span.corner.corner-br {}
                    div.stream-frame {
                        @match live.stream() {
                            Some(url) => {
                                iframe src=(url) allow=(IFRAME_ALLOW) allowfullscreen
                                    title="Wedding Live Stream" {}
                            }
                            None => {
                                div.stream-placeholder {
                                    button.play-button type="button" aria-label="Stream not started" data-stream-cta {
                                        svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" {
                                            path d="M8 5v14l11-7z" {}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                p.stream-note.reveal-item style=(delay_style(800)) {
                    "Stream will be live on the wedding day"
                }
            }
        }
    })
}

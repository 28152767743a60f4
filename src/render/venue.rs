//! Venue card, used for both `#venue` and `#reception`.
//!
//! The component takes the section id from its caller. Keeping two instances
//! apart is the composer's job: it passes [`SectionKind::Venue`] and
//! [`SectionKind::Reception`] ids, which are distinct by construction.
//!
//! [`SectionKind::Venue`]: crate::sections::SectionKind::Venue
//! [`SectionKind::Reception`]: crate::sections::SectionKind::Reception

use super::{date_line, delay_style, image_layer, non_empty, section_heading};
use crate::runtime::Reveal;
use crate::wedding::VenueData;
use maud::{Markup, html};

const MARGIN_PX: u32 = 80;

pub fn render_venue(venue: Option<&VenueData>, id: &str) -> Option<Markup> {
    let venue = venue.filter(|v| v.enabled)?;
    let reveal = Reveal::new(MARGIN_PX);
    let when = [venue.date.as_str(), venue.time.as_str()]
        .into_iter()
        .filter_map(non_empty)
        .collect::<Vec<_>>()
        .join(" | ");

    Some(html! {
        section id=(id) class="venue" data-reveal=(reveal.margin_px()) {
            div.mandala-glow {}
            div.container {
                (section_heading(&date_line(&venue.date, &venue.time), &venue.section_title, None))

                div.venue-grid {
                    div.venue-photo.reveal-item.from-left style=(delay_style(300)) {
                        (image_layer("venue-photo-image", &venue.image))
                        div.venue-photo-shade {}
                        div.venue-photo-caption {
                            h3 { (venue.name) }
                        }
                        div.venue-photo-frame {}
                    }

                    div.venue-details.reveal-item.from-right style=(delay_style(500)) {
                        div.glass-card {
                            h3.venue-name { (venue.name) }
                            @if let Some(address) = non_empty(&venue.address) {
                                div.venue-row {
                                    span.venue-icon.bounce aria-hidden="true" { "📍" }
                                    p { (address) }
                                }
                            }
                            @if !when.is_empty() {
                                div.venue-row {
                                    span.venue-icon aria-hidden="true" { "📅" }
                                    p { (when) }
                                }
                            }
                            div.card-rule {}
                            a.directions-button href=(venue.directions_url()) target="_blank" rel="noopener noreferrer" {
                                span { "Get Directions" }
                                span aria-hidden="true" { "→" }
                            }
                        }

                        @if let Some(map) = non_empty(&venue.map_embed_url) {
                            div.venue-map.reveal-item style=(delay_style(700)) {
                                iframe src=(map) loading="lazy" allowfullscreen
                                    referrerpolicy="no-referrer-when-downgrade"
                                    title={ (venue.name) " Map" } {}
                            }
                        }
                    }
                }
            }
        }
    })
}

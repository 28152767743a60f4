//! `#story`: the couple's timeline.
//!
//! Events alternate sides by index parity (even → left, odd → right) on wide
//! screens and stack on narrow ones. Each event reveals on its own, with a
//! larger margin than the section so a long timeline unfolds as it scrolls.

use super::{delay_style, image_layer, inline_markdown, section_heading};
use crate::runtime::Reveal;
use crate::sections::SectionKind;
use crate::wedding::{StoryData, StoryEvent};
use maud::{Markup, html};

const SECTION_MARGIN_PX: u32 = 50;
const EVENT_MARGIN_PX: u32 = 100;

/// Which side of the center line an event sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Side::Left } else { Side::Right }
    }

    fn class(self) -> &'static str {
        match self {
            Side::Left => "timeline-event is-left",
            Side::Right => "timeline-event is-right",
        }
    }
}

pub fn render_story(story: Option<&StoryData>) -> Option<Markup> {
    let story = story.filter(|s| s.enabled)?;
    let reveal = Reveal::new(SECTION_MARGIN_PX);

    Some(html! {
        section id=(SectionKind::Story.id()) class="story" data-reveal=(reveal.margin_px()) {
            div.dot-pattern {}
            div.container {
                (section_heading(&story.subtitle, &story.title, None))

                div.sketches {
                    (image_layer("sketch sketch-groom reveal-item", &story.groom_sketch))
                    span.sketch-heart.reveal-item style=(delay_style(600)) { "❤" }
                    (image_layer("sketch sketch-bride reveal-item", &story.bride_sketch))
                }

                div.timeline {
                    div.timeline-line {}
                    @for (idx, event) in story.events.iter().enumerate() {
                        (render_event(event, idx))
                    }
                }

                div.together.reveal-item style=(delay_style(300)) {
                    (image_layer("couple-portrait", &story.couple_image))
                    p.together-caption { "Together Forever" }
                }
            }
        }
    })
}

fn render_event(event: &StoryEvent, index: usize) -> Markup {
    let side = Side::for_index(index);
    let reveal = Reveal::new(EVENT_MARGIN_PX);
    html! {
        div class=(side.class()) data-reveal=(reveal.margin_px()) {
            div.event-card.reveal-item style=(delay_style(200)) {
                span.event-accent {}
                span.event-year { (event.year) }
                h3.event-title { (event.title) }
                div.event-description { (inline_markdown(&event.description)) }
            }
            div.timeline-marker.reveal-item style=(delay_style(400)) {}
            div.event-image.reveal-item style=(delay_style(300)) {
                (image_layer("event-photo", &event.image))
                div.event-image-tint {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn disabled_story_renders_nothing() {
        let mut data = full_wedding();
        data.story.as_mut().unwrap().enabled = false;
        assert!(render_story(data.story.as_ref()).is_none());
        assert!(render_story(None).is_none());
    }

    #[test]
    fn side_alternates_by_parity() {
        assert_eq!(Side::for_index(0), Side::Left);
        assert_eq!(Side::for_index(1), Side::Right);
        assert_eq!(Side::for_index(2), Side::Left);
    }

    #[test]
    fn events_render_in_order_alternating() {
        let data = full_wedding();
        let html = render_story(data.story.as_ref()).unwrap().into_string();
        let sides: Vec<bool> = tags_with_class(&html, "div", "timeline-event")
            .iter()
            .map(|t| has_class(t, "is-left"))
            .collect();
        assert_eq!(sides, [true, false, true]);

        let first = html.find("First Meeting").unwrap();
        let second = html.find("First Trip").unwrap();
        let third = html.find("The Proposal").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn events_reveal_independently() {
        let data = full_wedding();
        let html = render_story(data.story.as_ref()).unwrap().into_string();
        for tag in tags_with_class(&html, "div", "timeline-event") {
            assert_eq!(attr(tag, "data-reveal"), Some("100"));
        }
        let section = tags(&html, "section")[0];
        assert_eq!(attr(section, "data-reveal"), Some("50"));
    }

    #[test]
    fn event_shows_year_title_description_image() {
        let data = full_wedding();
        let html = render_story(data.story.as_ref()).unwrap().into_string();
        assert!(html.contains("2019"));
        assert!(html.contains("What happened in 2019."));
        assert!(html.contains("url('/images/story-2019.jpg')"));
        assert!(html.contains("timeline-marker"));
        assert!(html.contains("timeline-line"));
    }

    #[test]
    fn description_markdown_is_rendered() {
        let mut data = full_wedding();
        data.story.as_mut().unwrap().events[0].description = "A *rainy* day".to_string();
        let html = render_story(data.story.as_ref()).unwrap().into_string();
        assert!(html.contains("A <em>rainy</em> day"));
    }

    #[test]
    fn empty_timeline_still_renders_section() {
        let mut data = full_wedding();
        data.story.as_mut().unwrap().events.clear();
        let html = render_story(data.story.as_ref()).unwrap().into_string();
        assert!(html.contains(r#"id="story""#));
        assert!(tags_with_class(&html, "div", "timeline-event").is_empty());
    }

    #[test]
    fn missing_sketches_fall_back() {
        let data = full_wedding();
        let html = render_story(data.story.as_ref()).unwrap().into_string();
        // full_wedding leaves the sketches empty
        assert_eq!(
            tags_with_class(&html, "div", "sketch")
                .iter()
                .filter(|t| has_class(t, "has-fallback"))
                .count(),
            2
        );
    }
}

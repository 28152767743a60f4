//! Decorative particle fields: loader bokeh, hero petals and glow, closing
//! sparkles.
//!
//! Particles are cosmetic and deliberately not reproducible. The generator
//! only fixes *how many* and *within which ranges*; the page script draws
//! every attribute uniformly at random when the page loads, so each visit gets
//! a fresh field and nothing is seeded or stored. A field is emitted as an
//! empty container whose `data-*` attributes carry the ranges:
//!
//! ```html
//! <div class="particles particles-petal" aria-hidden="true"
//!      data-particles="petal" data-count="15" data-placement="top"
//!      data-size="8,24" data-delay="0,8" data-duration="8,14"
//!      data-colors="rgba(212,168,83,0.6)|rgba(255,182,193,0.5)|…"></div>
//! ```
//!
//! Colors are assigned by index (`i % colors.len()`), not at random, so a
//! field always shows an even mix of its palette.

use maud::{Markup, html};

/// An inclusive `[min, max]` range a particle attribute is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn attr(self) -> String {
        format!("{},{}", self.min, self.max)
    }
}

/// Where particles are placed inside their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Random left and top.
    Area,
    /// Random left, starting above the top edge (falling petals).
    Top,
}

impl Placement {
    fn attr(self) -> &'static str {
        match self {
            Placement::Area => "area",
            Placement::Top => "top",
        }
    }
}

/// Recipe for one particle field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    /// CSS modifier and script key, e.g. `"bokeh"`.
    pub kind: &'static str,
    pub count: u32,
    pub placement: Placement,
    /// Diameter in px.
    pub size: Span,
    /// Animation delay in seconds.
    pub delay: Span,
    /// Animation duration in seconds.
    pub duration: Span,
    pub colors: &'static [&'static str],
}

pub const BOKEH: ParticleField = ParticleField {
    kind: "bokeh",
    count: 20,
    placement: Placement::Area,
    size: Span::new(30.0, 130.0),
    delay: Span::new(0.0, 2.0),
    duration: Span::new(2.0, 5.0),
    colors: &[
        "rgba(212,168,83,0.15)",
        "rgba(128,0,32,0.1)",
        "rgba(255,192,203,0.08)",
    ],
};

pub const PETALS: ParticleField = ParticleField {
    kind: "petal",
    count: 15,
    placement: Placement::Top,
    size: Span::new(8.0, 24.0),
    delay: Span::new(0.0, 8.0),
    duration: Span::new(8.0, 14.0),
    colors: &[
        "rgba(212,168,83,0.6)",
        "rgba(255,182,193,0.5)",
        "rgba(255,160,122,0.5)",
    ],
};

pub const GLOW: ParticleField = ParticleField {
    kind: "glow",
    count: 25,
    placement: Placement::Area,
    size: Span::new(2.0, 6.0),
    delay: Span::new(0.0, 4.0),
    duration: Span::new(3.0, 3.0),
    colors: &["rgba(240,215,140,0.9)"],
};

pub const SPARKLES: ParticleField = ParticleField {
    kind: "sparkle",
    count: 40,
    placement: Placement::Area,
    size: Span::new(2.0, 7.0),
    delay: Span::new(0.0, 5.0),
    duration: Span::new(2.0, 5.0),
    colors: &["rgba(212,168,83,0.8)"],
};

impl ParticleField {
    /// Same recipe with a different count (from `[particles]` in config).
    pub fn with_count(&self, count: u32) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    /// Render the empty, script-populated container. A zero count renders
    /// nothing.
    pub fn render(&self) -> Markup {
        if self.count == 0 {
            return html! {};
        }
        let class = format!("particles particles-{}", self.kind);
        html! {
            div class=(class)
                aria-hidden="true"
                data-particles=(self.kind)
                data-count=(self.count)
                data-placement=(self.placement.attr())
                data-size=(self.size.attr())
                data-delay=(self.delay.attr())
                data-duration=(self.duration.attr())
                data-colors=(self.colors.join("|")) {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_attr_formats_without_trailing_zeros() {
        assert_eq!(Span::new(8.0, 24.0).attr(), "8,24");
        assert_eq!(Span::new(0.5, 2.25).attr(), "0.5,2.25");
    }

    #[test]
    fn render_carries_ranges() {
        let html = PETALS.render().into_string();
        assert!(html.contains(r#"data-particles="petal""#));
        assert!(html.contains(r#"data-count="15""#));
        assert!(html.contains(r#"data-placement="top""#));
        assert!(html.contains(r#"data-size="8,24""#));
        assert!(html.contains(r#"data-duration="8,14""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn colors_are_pipe_separated() {
        let html = BOKEH.render().into_string();
        assert!(html.contains("rgba(212,168,83,0.15)|rgba(128,0,32,0.1)|rgba(255,192,203,0.08)"));
    }

    #[test]
    fn with_count_overrides_only_count() {
        let field = SPARKLES.with_count(5);
        assert_eq!(field.count, 5);
        assert_eq!(field.size, SPARKLES.size);
        assert_eq!(field.kind, "sparkle");
    }

    #[test]
    fn zero_count_renders_nothing() {
        assert_eq!(GLOW.with_count(0).render().into_string(), "");
    }

    #[test]
    fn recipes_have_ordered_ranges() {
        for field in [&BOKEH, &PETALS, &GLOW, &SPARKLES] {
            assert!(field.size.min <= field.size.max, "{}", field.kind);
            assert!(field.delay.min <= field.delay.max, "{}", field.kind);
            assert!(field.duration.min <= field.duration.max, "{}", field.kind);
            assert!(!field.colors.is_empty(), "{}", field.kind);
        }
    }
}

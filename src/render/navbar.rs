//! Fixed navigation bar with a mobile overlay menu.
//!
//! Desktop links and the mobile menu render the same [`nav_items`] list, so
//! there is exactly one source for which anchors exist. Links are real
//! `href="#section"` anchors: with scripting off they still jump; with it on
//! the script intercepts the click, closes the menu and smooth-scrolls.

use super::{delay_style, flag};
use crate::runtime::NavState;
use crate::sections::{SectionKind, nav_items};
use crate::wedding::WeddingData;
use maud::{Markup, html};

/// Stagger between mobile menu entries.
const MOBILE_STAGGER_MS: u32 = 50;

pub fn render_navbar(data: &WeddingData, state: &NavState) -> Markup {
    let items = nav_items(data);
    // The logo links home only if there is a hero to land on.
    let logo_href = if SectionKind::Hero.is_enabled(data) {
        SectionKind::Hero.anchor()
    } else {
        "#content".to_string()
    };
    let menu_open = state.is_menu_open();

    html! {
        nav.navbar id="navbar" data-scrolled=(flag(state.is_scrolled())) {
            div.navbar-backdrop {}
            div.navbar-inner {
                a.navbar-logo href=(logo_href) data-nav-link { (data.site.couple_names) }
                div.navbar-links {
                    @for item in &items {
                        a.nav-link href=(item.href) data-nav-link {
                            (item.label)
                            span.nav-underline {}
                        }
                    }
                }
                @if !items.is_empty() {
                    button.nav-toggle type="button" aria-label="Toggle menu"
                        aria-controls="mobile-menu" aria-expanded=(flag(menu_open)) data-nav-toggle {
                        span.nav-toggle-bar {}
                        span.nav-toggle-bar {}
                        span.nav-toggle-bar {}
                    }
                }
            }
        }
        @if !items.is_empty() {
            div.mobile-menu id="mobile-menu" data-open=(flag(menu_open)) {
                div.mobile-menu-backdrop {}
                div.mobile-menu-links {
                    @for (idx, item) in items.iter().enumerate() {
                        a.mobile-link href=(item.href) data-nav-link
                            style=(delay_style(100 + idx as u32 * MOBILE_STAGGER_MS)) {
                            (item.label)
                        }
                    }
                }
            }
        }
    }
}

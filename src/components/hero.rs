//! Hero banner - full-height title card above the sections.
//!
//! Scales up and fades in once on load; unlike the sections below it, the
//! hero does not react to scrolling.

use dioxus::prelude::*;
use folio_core::{ContentSection, Hero};

use super::scroll_to_anchor;

#[component]
pub fn HeroBanner(
    hero: Hero,
    /// Section the scroll hint links to
    #[props(!optional)]
    next: Option<ContentSection>,
) -> Element {
    let hint = match next {
        Some(section) => {
            let id = section.id.clone();
            rsx! {
                a {
                    class: "scroll-hint",
                    href: section.href(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        scroll_to_anchor(&id);
                    },
                    "{hero.scroll_hint}"
                }
            }
        }
        None => rsx! {
            div { class: "scroll-hint", "{hero.scroll_hint}" }
        },
    };

    rsx! {
        header { class: "hero",
            div { class: "hero-intro",
                h1 { class: "hero-title", "{hero.headline}" }
                p { class: "hero-tagline", "{hero.tagline}" }
            }
            {hint}
        }
    }
}

//! The portfolio page: hero, reveal sections in order, footer.

use dioxus::prelude::*;
use folio_ui::RevealSection;

use crate::components::{scroll_to_anchor, HeroBanner, PageFooter, SectionContent};
use crate::context::use_portfolio;

/// Full page body.
///
/// `focus` names a section anchor to scroll into view once the page is
/// mounted.
#[component]
pub fn PortfolioPage(
    /// Anchor to scroll to after mount
    #[props(!optional)]
    focus: Option<String>,
) -> Element {
    let page = use_portfolio();

    let on_mounted = move |_| {
        if let Some(id) = &focus {
            tracing::info!(section = %id, "Scrolling to section");
            scroll_to_anchor(id);
        }
    };

    rsx! {
        div { class: "portfolio", onmounted: on_mounted,
            div { class: "mesh-line", "aria-hidden": "true" }

            HeroBanner {
                hero: page.hero.clone(),
                next: page.sections().first().cloned(),
            }

            for section in page.sections().iter() {
                RevealSection {
                    key: "{section.id}",
                    id: section.id.clone(),
                    title: section.title.clone(),
                    icon: section.icon,
                    SectionContent { body: section.body.clone() }
                }
            }

            PageFooter { footer: page.footer.clone() }
        }
    }
}

//! Deep link to one section's anchor.
//!
//! Unknown ids are logged and the page opens at the top.

use dioxus::prelude::*;

use crate::context::use_portfolio;
use crate::pages::PortfolioPage;

/// Section link page component.
#[component]
pub fn SectionLink(id: String) -> Element {
    let page = use_portfolio();

    let focus = match page.section(&id) {
        Ok(section) => Some(section.id.clone()),
        Err(e) => {
            tracing::warn!("Ignoring deep link: {}", e);
            None
        }
    };

    rsx! {
        PortfolioPage { focus: focus }
    }
}

//! Home page - the portfolio from the top.
//!
//! Honors `--section` on first render so the window can open at an anchor.

use dioxus::prelude::*;

use crate::context::get_initial_section;
use crate::pages::PortfolioPage;

/// Home page component.
#[component]
pub fn Home() -> Element {
    // Only the first mount follows the launch flag
    let focus = use_hook(get_initial_section);

    rsx! {
        PortfolioPage { focus: focus }
    }
}

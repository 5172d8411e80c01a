use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::content;

use crate::context::{get_reveal_config, SharedPortfolio};
use crate::pages::{Home, SectionLink};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The portfolio page
/// - `/sections/:id` - The same page, scrolled to one section's anchor
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/sections/:id")]
    SectionLink { id: String },
}

/// Root application component.
///
/// Provides global styles, reveal settings, page content, and routing.
#[component]
pub fn App() -> Element {
    // Reveal settings are read by every RevealSection
    use_context_provider(get_reveal_config);

    let page = use_hook(|| {
        content::portfolio()
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });

    let body = match page {
        Ok(page) => rsx! {
            PortfolioProvider { page: page }
        },
        Err(message) => {
            tracing::error!("Portfolio content is invalid: {}", message);
            rsx! {
                main { class: "load-error",
                    h1 { class: "section-title", "Portfolio unavailable" }
                    p { "{message}" }
                }
            }
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {body}
    }
}

/// Puts the page content in context for everything below the router.
#[component]
fn PortfolioProvider(page: SharedPortfolio) -> Element {
    use_context_provider(|| page.clone());

    rsx! {
        Router::<Route> {}
    }
}

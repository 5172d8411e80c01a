//! Launch settings and page content for the portfolio.
//!
//! Provides the reveal settings and the portfolio content to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_reveal_config);
//!
//! // In child components
//! let page = use_portfolio();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{Portfolio, RevealConfig};

/// Shared page content type for context.
///
/// Built once at startup and never mutated, so a plain `Rc` suffices.
pub type SharedPortfolio = Rc<Portfolio>;

/// Get the reveal settings chosen at launch.
pub fn get_reveal_config() -> RevealConfig {
    crate::get_reveal_config()
}

/// Get the section to scroll to on launch (set via --section).
pub fn get_initial_section() -> Option<String> {
    crate::get_initial_section()
}

/// Hook to access the portfolio content from context.
pub fn use_portfolio() -> SharedPortfolio {
    use_context::<SharedPortfolio>()
}

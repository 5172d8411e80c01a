//! Visual theme for the portfolio page.

mod styles;

pub use styles::GLOBAL_STYLES;

//! Reusable components for the portfolio page.
//!
//! - Reveal sections with viewport observation
//! - Lucide-style section glyphs
//! - Skill chips

mod eval_observer;
mod icon;
mod reveal_section;
mod skill_pills;

pub use eval_observer::*;
pub use icon::*;
pub use reveal_section::*;
pub use skill_pills::*;

//! Page-specific components for the portfolio.

mod anchor;
mod footer;
mod hero;
mod markdown;
mod section_content;

pub use anchor::scroll_to_anchor;
pub use footer::PageFooter;
pub use hero::HeroBanner;
pub use section_content::SectionContent;

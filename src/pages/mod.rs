//! Page components for the portfolio.

mod home;
mod portfolio;
mod section_link;

pub use home::Home;
pub use portfolio::PortfolioPage;
pub use section_link::SectionLink;

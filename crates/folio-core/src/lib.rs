//! Folio Core Library
//!
//! Content model and reveal-on-scroll behavior for a single-page portfolio.
//!
//! ## Overview
//!
//! The page is a hero banner, a fixed sequence of [`ContentSection`]s and a
//! footer. Each section starts hidden (offset and transparent) and is revealed
//! when roughly half of it enters the viewport, hiding again when it leaves.
//!
//! This crate has no UI framework dependency. The hosting runtime supplies a
//! [`VisibilityObserver`]; [`run_reveal`] turns its signals into
//! [`RevealTransition`]s.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{observer, run_reveal, RevealConfig};
//!
//! let (host, mut observer) = observer::channel();
//! let config = RevealConfig::default();
//! run_reveal(&mut observer, "experience", &config, |t| {
//!     println!("experience is now {}", t.to);
//! })
//! .await;
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod observer;
pub mod reveal;
pub mod visibility;

// Re-exports
pub use config::{Easing, RevealConfig, RevealMode};
pub use content::{
    ContentSection, Footer, Hero, Portfolio, Project, Publication, Role, SectionBody, SectionIcon,
};
pub use error::{FolioError, Result};
pub use observer::{run_reveal, ChannelObserver, RevealOutcome, VisibilityObserver};
pub use reveal::{RevealMachine, RevealState, RevealTransition};
pub use visibility::{ObserveRequest, ScrollGeometry, VisibilitySample, VisibilitySignal};

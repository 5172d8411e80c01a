//! Folio UI Components
//!
//! Dioxus components for the reveal-on-scroll portfolio page.
//!
//! ## Reveal Sections
//!
//! [`RevealSection`] wraps any content in an anchored `section` that fades
//! and slides into place when about half of it is on screen, and slides back
//! out when it leaves. Visibility comes from the webview's
//! `IntersectionObserver` through [`EvalObserver`]; hosts without one fall
//! back to scroll measurements, and hosts without either show every section
//! fully revealed.
//!
//! Reveal settings are read from a [`folio_core::RevealConfig`] context when
//! one is provided, otherwise defaults apply.

pub mod components;

pub use components::*;

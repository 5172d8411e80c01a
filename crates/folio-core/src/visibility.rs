//! Visibility measurements reported by the hosting runtime.
//!
//! Two sources feed the same ratio computation:
//!
//! ```text
//! IntersectionObserver entry ──► VisibilitySample ──┐
//!                                                    ├──► ratio() ──► RevealMachine
//! getBoundingClientRect     ──► ScrollGeometry  ────┘
//! ```
//!
//! The ratio is measured against the smaller of the section and the viewport.
//! A section shorter than the viewport reaches 1.0 once fully on screen, and a
//! section taller than the viewport reaches 1.0 once it fills the screen.

use serde::{Deserialize, Serialize};

/// One intersection measurement, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilitySample {
    /// Height of the part of the section inside the viewport
    pub visible_height: f64,
    /// Full height of the section
    pub element_height: f64,
    /// Height of the viewport
    pub viewport_height: f64,
}

impl VisibilitySample {
    pub fn new(visible_height: f64, element_height: f64, viewport_height: f64) -> Self {
        Self {
            visible_height,
            element_height,
            viewport_height,
        }
    }

    /// Fraction of the section that counts as visible, in `[0, 1]`.
    ///
    /// Unlike a plain area ratio (`visible / element`), the basis is the
    /// smaller of the section and the viewport, so a section taller than the
    /// viewport can still reach the reveal threshold.
    ///
    /// Returns NaN when any input is NaN so callers can drop the sample.
    pub fn ratio(&self) -> f64 {
        if self.visible_height.is_nan()
            || self.element_height.is_nan()
            || self.viewport_height.is_nan()
        {
            return f64::NAN;
        }
        let basis = self.element_height.min(self.viewport_height);
        if basis <= 0.0 {
            return 0.0;
        }
        (self.visible_height / basis).clamp(0.0, 1.0)
    }
}

/// Raw element position relative to the viewport top.
///
/// Used when the host has no intersection capability and only reports the
/// bounding rect on scroll and resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollGeometry {
    /// Distance from the viewport top to the section top (negative when
    /// scrolled past)
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl ScrollGeometry {
    /// Height of the section clipped to the viewport.
    pub fn visible_height(&self) -> f64 {
        let bottom = self.top + self.height;
        (bottom.min(self.viewport_height) - self.top.max(0.0)).max(0.0)
    }

    pub fn sample(&self) -> VisibilitySample {
        VisibilitySample::new(self.visible_height(), self.height, self.viewport_height)
    }
}

/// Message from the host observer for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisibilitySignal {
    /// Entry delivered by a native intersection observer
    Intersection(VisibilitySample),
    /// Bounding rect measured on scroll or resize
    Geometry(ScrollGeometry),
    /// The target element is not in the document
    Missing,
    /// The host has no way to detect visibility
    Unsupported,
}

impl VisibilitySignal {
    /// Visibility ratio carried by this signal, if it is a measurement.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            VisibilitySignal::Intersection(sample) => Some(sample.ratio()),
            VisibilitySignal::Geometry(geometry) => Some(geometry.sample().ratio()),
            VisibilitySignal::Missing | VisibilitySignal::Unsupported => None,
        }
    }
}

/// Request sent to the host to start observing one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserveRequest {
    /// DOM id of the element
    pub target: String,
    /// Ratios at which the host should report
    pub thresholds: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn small_section_fully_contained_is_fully_visible() {
        let geometry = ScrollGeometry {
            top: 100.0,
            height: 300.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(geometry.visible_height(), 300.0);
        assert_eq!(geometry.sample().ratio(), 1.0);
    }

    #[test]
    fn section_below_viewport_is_invisible() {
        let geometry = ScrollGeometry {
            top: 900.0,
            height: 400.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(geometry.visible_height(), 0.0);
        assert_eq!(geometry.sample().ratio(), 0.0);
    }

    #[test]
    fn section_scrolled_past_is_invisible() {
        let geometry = ScrollGeometry {
            top: -500.0,
            height: 400.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(geometry.visible_height(), 0.0);
    }

    #[test]
    fn partially_entered_section() {
        // Top 150px of a 400px section peeks in at the bottom
        let geometry = ScrollGeometry {
            top: 650.0,
            height: 400.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(geometry.visible_height(), 150.0);
        assert_eq!(geometry.sample().ratio(), 0.375);
    }

    #[test]
    fn tall_section_filling_viewport_is_fully_visible() {
        let geometry = ScrollGeometry {
            top: -200.0,
            height: 2000.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(geometry.visible_height(), VIEWPORT);
        assert_eq!(geometry.sample().ratio(), 1.0);
    }

    #[test]
    fn degenerate_heights() {
        assert_eq!(VisibilitySample::new(0.0, 0.0, VIEWPORT).ratio(), 0.0);
        assert_eq!(VisibilitySample::new(10.0, 100.0, 0.0).ratio(), 0.0);
        assert!(VisibilitySample::new(f64::NAN, 100.0, VIEWPORT)
            .ratio()
            .is_nan());
    }

    #[test]
    fn signals_parse_from_host_json() {
        let signal: VisibilitySignal = serde_json::from_str(
            r#"{"kind":"intersection","visible_height":60,"element_height":100,"viewport_height":800}"#,
        )
        .unwrap();
        assert_eq!(signal.ratio(), Some(0.6));

        let signal: VisibilitySignal = serde_json::from_str(
            r#"{"kind":"geometry","top":0,"height":100,"viewport_height":800}"#,
        )
        .unwrap();
        assert_eq!(signal.ratio(), Some(1.0));

        let signal: VisibilitySignal = serde_json::from_str(r#"{"kind":"unsupported"}"#).unwrap();
        assert_eq!(signal, VisibilitySignal::Unsupported);
        assert_eq!(signal.ratio(), None);

        let signal: VisibilitySignal = serde_json::from_str(r#"{"kind":"missing"}"#).unwrap();
        assert_eq!(signal, VisibilitySignal::Missing);
    }
}

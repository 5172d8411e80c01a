//! Reveal animation settings.
//!
//! Defaults give the page its standard motion: sections start 50px low and
//! transparent, and ease out to rest over 800ms once half of them is on screen.
//! A JSON file may override any subset of fields:
//!
//! ```json
//! { "threshold": 0.35, "duration_ms": 600, "mode": "once" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Spacing of the intermediate thresholds handed to the host observer.
const THRESHOLD_STEP: f64 = 0.05;

/// Easing curve for the reveal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    /// Decelerates toward the end.
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// CSS timing function for this curve.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "cubic-bezier(0.42, 0, 1, 1)",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

/// Whether a section may hide again after it has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Hide on exit, reveal again on re-entry
    #[default]
    Replay,
    /// Stay revealed after the first crossing
    Once,
}

/// Settings shared by every reveal section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visibility ratio at or above which a section is revealed
    pub threshold: f64,
    /// Vertical offset of a hidden section, in CSS pixels
    pub offset_px: f64,
    /// Transition duration in milliseconds
    pub duration_ms: u64,
    pub easing: Easing,
    pub mode: RevealMode,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            offset_px: 50.0,
            duration_ms: 800,
            easing: Easing::EaseOut,
            mode: RevealMode::Replay,
        }
    }
}

impl RevealConfig {
    /// Read and validate a JSON config file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: RevealConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "Loaded reveal config");
        Ok(config)
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(FolioError::InvalidThreshold(self.threshold));
        }
        if !self.offset_px.is_finite() || self.offset_px < 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "offset_px must be a non-negative number, got {}",
                self.offset_px
            )));
        }
        Ok(())
    }

    /// Ratios at which the host observer should report.
    ///
    /// Evenly spaced from 0 to 1, plus the reveal threshold itself. Hosts
    /// compare these against the visible fraction of the element's height,
    /// which equals the reveal ratio only for sections no taller than the
    /// viewport. Taller sections rely on the host's per-frame geometry
    /// samples while they intersect.
    pub fn observer_thresholds(&self) -> Vec<f64> {
        let steps = (1.0 / THRESHOLD_STEP).round() as usize;
        let mut thresholds: Vec<f64> = (0..=steps)
            .map(|i| i as f64 * THRESHOLD_STEP)
            .collect();
        if !thresholds
            .iter()
            .any(|t| (t - self.threshold).abs() < 1e-9)
        {
            thresholds.push(self.threshold);
            thresholds.sort_by(|a, b| a.total_cmp(b));
        }
        thresholds
    }

    /// CSS `transition` value for the opacity and transform properties.
    pub fn transition_css(&self) -> String {
        let easing = self.easing.css();
        format!(
            "opacity {ms}ms {easing}, transform {ms}ms {easing}",
            ms = self.duration_ms
        )
    }
}

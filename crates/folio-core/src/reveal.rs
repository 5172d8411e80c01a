//! Reveal-on-scroll state machine.
//!
//! ```text
//!            ratio >= threshold
//!   ┌────────┐ ───────────────► ┌──────────┐
//!   │ Hidden │                  │ Revealed │
//!   └────────┘ ◄─────────────── └──────────┘
//!            ratio <  threshold
//! ```
//!
//! Every section starts `Hidden`. The machine only reports a transition when
//! the state actually changes, so a burst of identical visibility signals
//! animates at most once.

use std::fmt;

use crate::config::{RevealConfig, RevealMode};

/// Visual state of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RevealState {
    /// Offset downward and fully transparent
    #[default]
    Hidden,
    /// Natural position, fully opaque
    Revealed,
}

impl RevealState {
    /// CSS class applied alongside the inline style.
    pub fn class(&self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Revealed => "reveal-revealed",
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            RevealState::Hidden => 0.0,
            RevealState::Revealed => 1.0,
        }
    }

    /// Vertical offset in pixels for this state.
    pub fn offset_px(&self, config: &RevealConfig) -> f64 {
        match self {
            RevealState::Hidden => config.offset_px,
            RevealState::Revealed => 0.0,
        }
    }

    /// Inline CSS for a section in this state.
    pub fn style(&self, config: &RevealConfig) -> String {
        format!(
            "transform: translateY({}px); opacity: {}; transition: {};",
            self.offset_px(config),
            self.opacity(),
            config.transition_css()
        )
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealState::Hidden => write!(f, "hidden"),
            RevealState::Revealed => write!(f, "revealed"),
        }
    }
}

/// A change of state produced by a visibility signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTransition {
    pub from: RevealState,
    pub to: RevealState,
}

/// Per-section reveal state machine.
#[derive(Debug, Clone)]
pub struct RevealMachine {
    state: RevealState,
    threshold: f64,
    mode: RevealMode,
    transitions: usize,
}

impl RevealMachine {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            state: RevealState::Hidden,
            threshold: config.threshold,
            mode: config.mode,
            transitions: 0,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Number of transitions taken so far.
    pub fn transitions(&self) -> usize {
        self.transitions
    }

    /// True once a `Once`-mode section has been revealed; further signals
    /// cannot change it.
    pub fn is_settled(&self) -> bool {
        self.mode == RevealMode::Once && self.state.is_revealed()
    }

    /// Feed one visibility ratio.
    ///
    /// Ratios are clamped to `[0, 1]`; NaN is ignored.
    pub fn observe(&mut self, ratio: f64) -> Option<RevealTransition> {
        if ratio.is_nan() || self.is_settled() {
            return None;
        }
        let ratio = ratio.clamp(0.0, 1.0);
        let target = if ratio >= self.threshold {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        };
        self.move_to(target)
    }

    /// Reveal unconditionally. Used when visibility cannot be detected.
    pub fn force_reveal(&mut self) -> Option<RevealTransition> {
        self.move_to(RevealState::Revealed)
    }

    fn move_to(&mut self, target: RevealState) -> Option<RevealTransition> {
        if target == self.state {
            return None;
        }
        let transition = RevealTransition {
            from: self.state,
            to: target,
        };
        self.state = target;
        self.transitions += 1;
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> RevealMachine {
        RevealMachine::new(&RevealConfig::default())
    }

    #[test]
    fn starts_hidden_with_offset_and_no_opacity() {
        let m = machine();
        assert_eq!(m.state(), RevealState::Hidden);
        let style = m.state().style(&RevealConfig::default());
        assert!(style.contains("translateY(50px)"));
        assert!(style.contains("opacity: 0;"));
    }

    #[test]
    fn revealed_style_has_no_offset() {
        let style = RevealState::Revealed.style(&RevealConfig::default());
        assert!(style.contains("translateY(0px)"));
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("800ms"));
    }

    #[test]
    fn crossing_up_and_down() {
        let mut m = machine();
        assert_eq!(
            m.observe(0.6),
            Some(RevealTransition {
                from: RevealState::Hidden,
                to: RevealState::Revealed
            })
        );
        assert_eq!(
            m.observe(0.1),
            Some(RevealTransition {
                from: RevealState::Revealed,
                to: RevealState::Hidden
            })
        );
        assert_eq!(m.transitions(), 2);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut m = machine();
        assert!(m.observe(0.5).is_some());
        assert!(m.state().is_revealed());
        assert!(m.observe(0.4999).is_some());
        assert!(!m.state().is_revealed());
    }

    #[test]
    fn repeated_signals_are_idempotent() {
        let mut m = machine();
        assert!(m.observe(0.7).is_some());
        assert!(m.observe(0.7).is_none());
        assert!(m.observe(0.9).is_none());
        assert!(m.observe(0.2).is_some());
        assert!(m.observe(0.2).is_none());
        assert_eq!(m.transitions(), 2);
    }

    #[test]
    fn below_threshold_while_hidden_is_silent() {
        let mut m = machine();
        assert!(m.observe(0.0).is_none());
        assert!(m.observe(0.3).is_none());
        assert_eq!(m.transitions(), 0);
    }

    #[test]
    fn nan_and_out_of_range() {
        let mut m = machine();
        assert!(m.observe(f64::NAN).is_none());
        assert!(m.observe(7.0).is_some());
        assert!(m.state().is_revealed());
        assert!(m.observe(-3.0).is_some());
        assert_eq!(m.state(), RevealState::Hidden);
    }

    #[test]
    fn once_mode_stays_revealed() {
        let config = RevealConfig {
            mode: RevealMode::Once,
            ..Default::default()
        };
        let mut m = RevealMachine::new(&config);
        assert!(!m.is_settled());
        assert!(m.observe(0.8).is_some());
        assert!(m.is_settled());
        assert!(m.observe(0.0).is_none());
        assert!(m.state().is_revealed());
    }

    #[test]
    fn force_reveal_only_transitions_once() {
        let mut m = machine();
        assert!(m.force_reveal().is_some());
        assert!(m.force_reveal().is_none());
        assert_eq!(m.state(), RevealState::Revealed);
    }

    #[test]
    fn state_labels() {
        assert_eq!(RevealState::Hidden.to_string(), "hidden");
        assert_eq!(RevealState::Revealed.class(), "reveal-revealed");
        assert_eq!(RevealState::default(), RevealState::Hidden);
    }
}

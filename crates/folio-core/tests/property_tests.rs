//! Property-based tests for the reveal state machine
//!
//! Uses proptest to verify invariants that must hold for any sequence of
//! visibility signals.

use folio_core::{
    RevealConfig, RevealMachine, RevealMode, RevealState, ScrollGeometry, VisibilitySample,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Ratios including out-of-range values the host might report
fn ratio_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0..=1.0f64,
        1 => -1.0..0.0f64,
        1 => 1.0..2.0f64,
    ]
}

fn threshold_strategy() -> impl Strategy<Value = f64> {
    0.01..=1.0f64
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After any signal the state is exactly `ratio >= threshold`
    #[test]
    fn state_tracks_threshold(
        threshold in threshold_strategy(),
        ratios in prop::collection::vec(ratio_strategy(), 1..50),
    ) {
        let config = RevealConfig { threshold, ..Default::default() };
        let mut machine = RevealMachine::new(&config);

        for ratio in ratios {
            machine.observe(ratio);
            let expected = ratio.clamp(0.0, 1.0) >= threshold;
            prop_assert_eq!(machine.state().is_revealed(), expected);
        }
    }

    /// Transitions strictly alternate, starting from Hidden
    #[test]
    fn transitions_alternate(ratios in prop::collection::vec(ratio_strategy(), 0..100)) {
        let mut machine = RevealMachine::new(&RevealConfig::default());
        let mut expected_from = RevealState::Hidden;

        for ratio in ratios {
            if let Some(transition) = machine.observe(ratio) {
                prop_assert_eq!(transition.from, expected_from);
                prop_assert_ne!(transition.from, transition.to);
                expected_from = transition.to;
            }
        }
    }

    /// Feeding the same ratio twice never produces a second transition
    #[test]
    fn repeated_ratio_is_idempotent(ratio in ratio_strategy(), repeats in 1usize..10) {
        let mut machine = RevealMachine::new(&RevealConfig::default());
        machine.observe(ratio);
        let count = machine.transitions();

        for _ in 0..repeats {
            prop_assert!(machine.observe(ratio).is_none());
        }
        prop_assert_eq!(machine.transitions(), count);
    }

    /// Once mode never leaves Revealed
    #[test]
    fn once_mode_is_sticky(ratios in prop::collection::vec(ratio_strategy(), 1..50)) {
        let config = RevealConfig { mode: RevealMode::Once, ..Default::default() };
        let mut machine = RevealMachine::new(&config);
        let mut seen_reveal = false;

        for ratio in ratios {
            machine.observe(ratio);
            seen_reveal |= machine.state().is_revealed();
            prop_assert_eq!(machine.state().is_revealed(), seen_reveal);
        }
        prop_assert!(machine.transitions() <= 1);
    }

    /// Ratios computed from geometry always land in [0, 1]
    #[test]
    fn geometry_ratio_in_unit_range(
        top in -5000.0..5000.0f64,
        height in 0.0..5000.0f64,
        viewport in 1.0..3000.0f64,
    ) {
        let geometry = ScrollGeometry { top, height, viewport_height: viewport };
        let visible = geometry.visible_height();
        prop_assert!(visible >= 0.0);
        prop_assert!(visible <= height.min(viewport) + 1e-9);

        let ratio = geometry.sample().ratio();
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    /// A section no taller than the viewport and fully inside it reads as 1.0
    #[test]
    fn contained_section_is_fully_visible(
        viewport in 100.0..3000.0f64,
        fraction in 0.01..=1.0f64,
        offset in 0.0..=1.0f64,
    ) {
        let height = viewport * fraction;
        let top = (viewport - height) * offset;
        let sample = ScrollGeometry { top, height, viewport_height: viewport }.sample();
        prop_assert!((sample.ratio() - 1.0).abs() < 1e-9);
    }

    /// Intersection samples never exceed 1 even if the host over-reports
    #[test]
    fn sample_ratio_clamped(visible in 0.0..10000.0f64, element in 1.0..5000.0f64) {
        let ratio = VisibilitySample::new(visible, element, 800.0).ratio();
        prop_assert!((0.0..=1.0).contains(&ratio));
    }
}

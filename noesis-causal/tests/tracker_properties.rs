//! Property tests for the causal link tracker.

use proptest::prelude::*;

use noesis_causal::CausalLinkTracker;
use noesis_core::models::Entity;

proptest! {
    // Strength stays in [0, 1] for any in-range observation sequence.
    #[test]
    fn strength_stays_in_unit_interval(
        observations in prop::collection::vec(0.0_f64..=1.0, 1..50)
    ) {
        let tracker = CausalLinkTracker::new();
        let source = Entity::new("src");
        let target = Entity::new("tgt");

        for &p in &observations {
            let edge = tracker.record_observation(&source, &target, p);
            prop_assert!(edge.strength >= 0.0 && edge.strength <= 1.0);
        }

        let edge = tracker.edge(&source, &target).unwrap();
        prop_assert_eq!(edge.observation_count, observations.len() as u64);
    }

    // With a constant observation p the strength converges toward p and
    // never overshoots past the initial value on the far side.
    #[test]
    fn constant_observations_converge(p in 0.0_f64..=1.0) {
        let tracker = CausalLinkTracker::new();
        let source = Entity::new("src");
        let target = Entity::new("tgt");

        for _ in 0..200 {
            tracker.record_observation(&source, &target, p);
        }

        let edge = tracker.edge(&source, &target).unwrap();
        prop_assert!((edge.strength - p).abs() < 1e-6);
    }
}

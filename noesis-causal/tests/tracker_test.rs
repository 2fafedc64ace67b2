//! Tests for the causal link tracker.

use std::sync::Arc;

use noesis_causal::CausalLinkTracker;
use noesis_core::models::Entity;

fn e(id: &str) -> Entity {
    Entity::new(id)
}

#[test]
fn first_observation_creates_edge() {
    let tracker = CausalLinkTracker::new();
    let edge = tracker.record_observation(&e("A"), &e("B"), 0.9);

    assert_eq!(edge.strength, 0.9);
    assert_eq!(edge.observation_count, 1);
    assert_eq!(tracker.len(), 1);
}

#[test]
fn second_observation_applies_ema() {
    let tracker = CausalLinkTracker::new();
    tracker.record_observation(&e("A"), &e("B"), 0.9);
    let edge = tracker.record_observation(&e("A"), &e("B"), 0.1);

    // 0.9 * 0.9 + 0.1 * 0.1 = 0.82
    assert!((edge.strength - 0.82).abs() < 1e-12);
    assert_eq!(edge.observation_count, 2);
}

#[test]
fn observed_probability_is_clamped() {
    let tracker = CausalLinkTracker::new();
    let edge = tracker.record_observation(&e("A"), &e("B"), 3.5);
    assert_eq!(edge.strength, 1.0);

    let edge = tracker.record_observation(&e("A"), &e("C"), -1.0);
    assert_eq!(edge.strength, 0.0);
}

#[test]
fn reverse_direction_is_a_distinct_edge() {
    let tracker = CausalLinkTracker::new();
    tracker.record_observation(&e("A"), &e("B"), 0.7);
    tracker.record_observation(&e("B"), &e("A"), 0.2);

    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.edge(&e("A"), &e("B")).unwrap().strength, 0.7);
    assert_eq!(tracker.edge(&e("B"), &e("A")).unwrap().strength, 0.2);
}

#[test]
fn edges_from_returns_sorted_targets() {
    let tracker = CausalLinkTracker::new();
    tracker.record_observation(&e("A"), &e("C"), 0.5);
    tracker.record_observation(&e("A"), &e("B"), 0.5);
    tracker.record_observation(&e("X"), &e("Y"), 0.5);

    let edges = tracker.edges_from(&e("A"));
    let targets: Vec<&str> = edges.iter().map(|edge| edge.target.as_str()).collect();
    assert_eq!(targets, vec!["B", "C"]);
}

#[test]
fn missing_edge_is_none() {
    let tracker = CausalLinkTracker::new();
    assert!(tracker.edge(&e("A"), &e("B")).is_none());
    assert!(tracker.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_on_one_key_never_lose_observations() {
    let tracker = Arc::new(CausalLinkTracker::new());
    let mut handles = Vec::new();

    for _ in 0..8 {
        let tracker = Arc::clone(&tracker);
        handles.push(tokio::spawn(async move {
            for _ in 0..100 {
                tracker.record_observation(&Entity::new("A"), &Entity::new("B"), 0.5);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let edge = tracker.edge(&e("A"), &e("B")).unwrap();
    assert_eq!(edge.observation_count, 800);
    assert!(edge.strength >= 0.0 && edge.strength <= 1.0);
}

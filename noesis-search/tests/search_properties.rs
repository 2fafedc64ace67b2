//! Property tests for beam path search.

use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;

use noesis_core::config::SearchConfig;
use noesis_core::errors::NoesisResult;
use noesis_core::models::Entity;
use noesis_core::traits::{IGraphStore, IPathScorer};
use noesis_search::BeamPathSearch;
use noesis_store::MemoryGraphStore;
use test_fixtures::StaticSeeder;

/// Deterministic scorer: derived from the byte content of the path.
struct ByteSumScorer;

#[async_trait]
impl IPathScorer for ByteSumScorer {
    async fn score_path(&self, _query: &str, path: &[Entity]) -> NoesisResult<f64> {
        let sum: u32 = path
            .iter()
            .flat_map(|e| e.as_str().bytes())
            .map(u32::from)
            .sum();
        Ok(f64::from(sum % 1000) / 1000.0)
    }
}

fn build_store(edges: &[(u8, u8)]) -> Arc<MemoryGraphStore> {
    let store = MemoryGraphStore::new();
    for &(src, tgt) in edges {
        store.add_edge(Entity::new(format!("n{src}")), Entity::new(format!("n{tgt}")));
    }
    Arc::new(store)
}

proptest! {
    // At most `width` paths, every path length ≤ depth + 1, result sorted
    // descending by score.
    #[test]
    fn width_depth_and_order_bounds(
        edges in prop::collection::vec((0u8..12, 0u8..12), 0..60),
        seeds in prop::collection::vec(0u8..12, 1..5),
        width in 1usize..6,
        depth in 0usize..4,
    ) {
        let store = build_store(&edges);
        let seeder = StaticSeeder::new(
            seeds.iter().map(|s| format!("n{s}")).collect::<Vec<_>>(),
        );
        let search = BeamPathSearch::new(
            store as Arc<dyn IGraphStore>,
            Arc::new(ByteSumScorer),
            Arc::new(seeder),
            SearchConfig::default(),
        );

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let beams = rt.block_on(search.search("q", width, depth)).unwrap();

        prop_assert!(beams.len() <= width);
        for beam in &beams {
            prop_assert!(!beam.path.is_empty());
            prop_assert!(beam.path.len() <= depth + 1);
        }
        for pair in beams.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    // Concurrency never changes the ranking: a single worker and many
    // workers produce identical results.
    #[test]
    fn concurrency_is_observably_sequential(
        edges in prop::collection::vec((0u8..10, 0u8..10), 0..40),
        seeds in prop::collection::vec(0u8..10, 1..4),
    ) {
        let seed_ids: Vec<String> = seeds.iter().map(|s| format!("n{s}")).collect();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();

        let mut results = Vec::new();
        for concurrency in [1usize, 8] {
            let config = SearchConfig {
                score_concurrency: concurrency,
                ..SearchConfig::default()
            };
            let search = BeamPathSearch::new(
                build_store(&edges) as Arc<dyn IGraphStore>,
                Arc::new(ByteSumScorer),
                Arc::new(StaticSeeder::new(seed_ids.clone())),
                config,
            );
            results.push(rt.block_on(search.search("q", 3, 2)).unwrap());
        }

        prop_assert_eq!(&results[0], &results[1]);
    }
}

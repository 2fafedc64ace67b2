pub mod generator;
pub mod graph_store;
pub mod scorer;
pub mod seeder;

pub use generator::IGenerator;
pub use graph_store::IGraphStore;
pub use scorer::IPathScorer;
pub use seeder::IEntitySeeder;

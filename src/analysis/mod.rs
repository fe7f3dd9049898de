// Per-feature cohesion analysis: the algorithmic core of the pipeline.

pub mod cohesion;
pub mod vector;

pub use cohesion::{analyze_feature, analyze_registry, CohesionResult};

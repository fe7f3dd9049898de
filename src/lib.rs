// Knit: semantic cohesion scoring for concept-feature taxonomies.
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline, plus configuration and error support.

pub mod analysis;
pub mod config;
pub mod embeddings;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod status;
pub mod taxonomy;

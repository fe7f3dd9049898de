// Concept-feature taxonomy: the annotation table parsed into a registry of
// feature records plus the global concept vocabulary.

pub mod loader;
pub mod registry;

pub use loader::{load_taxonomy, RegistryBuilder};
pub use registry::{Feature, FeatureRegistry};

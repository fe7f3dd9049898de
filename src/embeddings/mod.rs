// Embedding acquisition and caching.
//
// The store resolves a token → vector lookup for a required vocabulary,
// either from the on-disk cache (vector array + parallel token list) or by
// scanning the raw pretrained corpus and persisting the cache for next time.

pub mod cache;
pub mod corpus;
pub mod store;

pub use store::{EmbeddingStore, Resolution};

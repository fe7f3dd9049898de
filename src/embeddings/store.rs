// The resolved token → vector lookup.
//
// Resolution has three outcomes: cache hit, build-from-corpus (which
// persists the cache as a side effect), or fatal-missing when neither
// source exists. The store owns the parallel token/vector arrays and only
// exposes them through `vector()` — consumers treat a missing token as
// "no embedding available", never as an error.

use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::error::PipelineError;

use super::{cache, corpus};

/// How the lookup was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Loaded from the on-disk cache; the corpus was not touched.
    CacheHit,
    /// Built by scanning the raw corpus; the cache was written for next time.
    Built,
}

/// Immutable token → vector lookup over the required vocabulary subset
/// present in the corpus. Safe to share by reference across analyzer
/// workers — nothing mutates after construction.
#[derive(Debug)]
pub struct EmbeddingStore {
    tokens: Vec<String>,
    vectors: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
}

impl EmbeddingStore {
    /// Assemble a store from parallel token/vector arrays.
    ///
    /// Callers are responsible for equal lengths; `resolve` is the normal
    /// entry point and checks that for cached data.
    pub fn from_parts(tokens: Vec<String>, vectors: Vec<Vec<f64>>) -> Self {
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self {
            tokens,
            vectors,
            index,
        }
    }

    /// Resolve the lookup for `required`, preferring the cache.
    ///
    /// `refresh` forces a corpus rescan even when a cache exists.
    pub fn resolve(
        config: &Config,
        required: &HashSet<String>,
        refresh: bool,
    ) -> Result<(Self, Resolution)> {
        let embedding_path = config.embedding_cache_path();
        let vocab_path = config.vocab_cache_path();

        if !refresh && config.cache_present() {
            let vectors = cache::load_vectors(&embedding_path)?;
            let tokens = cache::load_vocab(&vocab_path)?;
            if vectors.len() != tokens.len() {
                return Err(PipelineError::Integrity(format!(
                    "cache length mismatch: {} vectors in {} but {} tokens in {}",
                    vectors.len(),
                    embedding_path.display(),
                    tokens.len(),
                    vocab_path.display()
                ))
                .into());
            }
            info!(tokens = tokens.len(), "Loaded embedding cache");
            return Ok((Self::from_parts(tokens, vectors), Resolution::CacheHit));
        }

        if !config.corpus_path.is_file() {
            return Err(PipelineError::not_found(
                config.corpus_path.clone(),
                "no embedding cache and no raw corpus to build one from",
            )
            .into());
        }

        let (tokens, vectors) = corpus::scan_corpus(&config.corpus_path, required)?;

        // Persist for future runs — the memoization side effect that makes
        // every later run O(vocabulary) instead of O(corpus).
        std::fs::create_dir_all(&config.cache_dir).with_context(|| {
            format!("Failed to create cache dir: {}", config.cache_dir.display())
        })?;
        cache::save_vectors(&embedding_path, &vectors)?;
        cache::save_vocab(&vocab_path, &tokens)?;
        info!(
            tokens = tokens.len(),
            cache = %embedding_path.display(),
            "Built embedding cache from corpus"
        );

        Ok((Self::from_parts(tokens, vectors), Resolution::Built))
    }

    /// The embedding for `token`, if the corpus had one.
    pub fn vector(&self, token: &str) -> Option<&[f64]> {
        self.index.get(token).map(|&i| self.vectors[i].as_slice())
    }

    /// Tokens in table (corpus) order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Vector dimensionality, if any vectors were resolved.
    pub fn dimension(&self) -> Option<usize> {
        self.vectors.first().map(|v| v.len())
    }
}

use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default pretrained embedding set — GloVe, 6B tokens, 300 dimensions.
pub const DEFAULT_EMBEDDING_NAME: &str = "glove.6B.300d";

/// Central configuration loaded from environment variables.
///
/// Paths only — there are no secrets. The .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// Name of the pretrained embedding set; cache file names derive from it.
    pub embedding_name: String,
    /// Raw embedding corpus (`token v_1 … v_d` per line). Only needed when
    /// the cache hasn't been built yet.
    pub corpus_path: PathBuf,
    /// Tab-separated concept-feature annotation table.
    pub feature_table_path: PathBuf,
    /// Directory holding the embedding cache artifacts.
    pub cache_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every key has a default, so `status` works out of the box; `analyze`
    /// validates the paths it actually needs via the `require_*` checks.
    pub fn load() -> Result<Self> {
        let embedding_name =
            env::var("KNIT_EMBEDDING_NAME").unwrap_or_else(|_| DEFAULT_EMBEDDING_NAME.to_string());

        let corpus_path = env::var("KNIT_CORPUS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(format!("./glove/{embedding_name}.txt")));

        Ok(Self {
            embedding_name,
            corpus_path,
            feature_table_path: env::var("KNIT_FEATURES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/concept_features.tsv")),
            cache_dir: env::var("KNIT_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./cache")),
        })
    }

    /// Serialized vector array, in corpus order.
    pub fn embedding_cache_path(&self) -> PathBuf {
        self.cache_dir
            .join(format!("embeddings.{}.bin", self.embedding_name))
    }

    /// Plain-text token list, one per line, parallel to the vector array.
    pub fn vocab_cache_path(&self) -> PathBuf {
        self.cache_dir
            .join(format!("vocab.{}.txt", self.embedding_name))
    }

    /// Both cache artifacts are present on disk.
    pub fn cache_present(&self) -> bool {
        self.embedding_cache_path().is_file() && self.vocab_cache_path().is_file()
    }

    /// Check that the feature table exists.
    /// Call this before any operation that loads the taxonomy.
    pub fn require_feature_table(&self) -> Result<()> {
        if !self.feature_table_path.is_file() {
            anyhow::bail!(
                "Feature table not found: {}\n\
                 Set KNIT_FEATURES_PATH in your .env file to the annotation table.",
                self.feature_table_path.display()
            );
        }
        Ok(())
    }

    /// Check that embeddings can be resolved: either the cache is built
    /// or the raw corpus is available to build it from.
    pub fn require_embeddings(&self) -> Result<()> {
        if self.cache_present() || self.corpus_path.is_file() {
            return Ok(());
        }
        anyhow::bail!(
            "No embedding cache in {} and no raw corpus at {}\n\
             Set KNIT_CORPUS_PATH to the pretrained embedding text file\n\
             (e.g. glove.6B.300d.txt); the cache is built on the first run.",
            self.cache_dir.display(),
            self.corpus_path.display()
        );
    }
}

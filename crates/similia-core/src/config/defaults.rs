//! Default values shared by the config structs. Scoring and sizing defaults
//! live in `crate::constants`; these cover the deployment-shaped knobs.

pub const DEFAULT_CORPUS_PATHS: &[&str] = &["data/remedies_full.json", "data/remedies_master.json"];

pub const DEFAULT_ARTIFACTS_DIR: &str = "data";

pub const DEFAULT_EMBED_ENDPOINT: &str = "http://127.0.0.1:8080/embed";

pub const DEFAULT_EMBED_MODEL: &str = "all-MiniLM-L6-v2";

pub const DEFAULT_EMBED_DIMENSIONS: usize = 384;

use std::path::PathBuf;

/// Rule-set loading failures.
///
/// A missing file is not an error — the store recovers through its fallback
/// chain. Malformed content is, and must reach the caller rather than
/// silently degrade to an empty rule set.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rule set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule set {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

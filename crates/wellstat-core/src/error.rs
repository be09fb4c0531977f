use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WellstatError {
    #[error("failed to load baseline from {path}: {reason}")]
    BaselineLoad { path: PathBuf, reason: String },

    #[error("invalid baseline: {0}")]
    BaselineInvalid(String),

    #[error("failed to load {collection} from {path}: {reason}")]
    CollectionLoad {
        collection: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

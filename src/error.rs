use std::path::PathBuf;

/// Errors raised at the edges of the catalog: parsing form labels and
/// loading inventory data. Pricing itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown {kind} label: {label:?}")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("Duplicate vehicle id {0} in inventory")]
    DuplicateId(u32),

    #[error("Failed to read inventory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid inventory JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

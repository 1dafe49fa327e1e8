use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Failure to load a JSON manifest (package.json or a resolved module's copy)
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a JSON manifest file
pub fn load_manifest(path: &Path) -> Result<Value, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ManifestError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// True when the JSON-pointer path resolves to a present, non-null value
pub fn has_field(manifest: &Value, pointer: &str) -> bool {
    manifest.pointer(pointer).is_some_and(|value| !value.is_null())
}

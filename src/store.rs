use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{EnrichError, Result};

const DATA_FILE: &str = "data/dashboard/dim_sku.json";

/// First `data/dashboard/dim_sku.json` found above the executable or the
/// working directory, else the one in the crate's own project root.
pub fn default_path() -> PathBuf {
    let starts = [
        env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)),
        env::current_dir().ok(),
    ];
    starts
        .iter()
        .flatten()
        .find_map(|start| find_data_file(start))
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(DATA_FILE))
}

/// Walks up from `start` until a directory holding the SKU file is found.
fn find_data_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DATA_FILE))
        .find(|candidate| candidate.is_file())
}

pub fn load(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path).map_err(|source| EnrichError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&raw).map_err(|source| EnrichError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match doc {
        Value::Array(records) => {
            debug!(path = %path.display(), records = records.len(), "loaded collection");
            Ok(records)
        }
        _ => Err(EnrichError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}

/// Writes the collection next to `path` and renames it into place.
pub fn save(path: &Path, records: &[Value]) -> Result<()> {
    let io_err = |source: std::io::Error| EnrichError::Io {
        path: path.to_path_buf(),
        source,
    };
    let json = serde_json::to_string_pretty(records).map_err(|source| EnrichError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).map_err(io_err)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(err));
    }
    debug!(path = %path.display(), records = records.len(), "saved collection");
    Ok(())
}

//! Location of the reference data shipped with the workspace.

use std::path::PathBuf;

/// Environment variable overriding the reference data directory.
pub const DATA_ENV_VAR: &str = "OCDS_DATA_DIR";

/// Resolves the data root: `OCDS_DATA_DIR` when set, otherwise the
/// in-repo `data/` directory.
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(DATA_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

/// Path of the Contracts Finder mapping table under a data root.
pub fn mappings_path(root: &std::path::Path) -> PathBuf {
    root.join("csv_mappings").join("contracts_finder_mappings.csv")
}

/// Path of the release-schema extract under a data root.
pub fn schema_path(root: &std::path::Path) -> PathBuf {
    root.join("schema").join("release-schema.json")
}

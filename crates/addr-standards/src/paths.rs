//! Reference directory path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the reference data directory.
pub const REFERENCE_ENV_VAR: &str = "ADDRESS_REFERENCE_DIR";

pub const ZIP_CODES_FILE: &str = "zip_codes.csv";
pub const CITY_NAMES_FILE: &str = "city_names.csv";
pub const STREET_TYPES_FILE: &str = "street_types.csv";

/// Get the reference data root directory.
///
/// Resolution order:
/// 1. `ADDRESS_REFERENCE_DIR` environment variable
/// 2. `reference/` directory relative to workspace root
pub fn default_reference_root() -> PathBuf {
    if let Ok(root) = std::env::var(REFERENCE_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../reference")
}

pub fn zip_codes_path(root: &Path) -> PathBuf {
    root.join(ZIP_CODES_FILE)
}

pub fn city_names_path(root: &Path) -> PathBuf {
    root.join(CITY_NAMES_FILE)
}

pub fn street_types_path(root: &Path) -> PathBuf {
    root.join(STREET_TYPES_FILE)
}

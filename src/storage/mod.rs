//! Storage Layer
//!
//! Config file location and detection file loading.

pub mod detection_file;

use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Default location of `config.toml`, if the platform has a config directory.
///
/// Nothing is created; the reader only ever loads from here.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "receiptreader", "ReceiptReader")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_names_config_file() {
        // Platforms without a home directory have no default location.
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
            assert!(!path.is_dir());
        }
    }
}

//! JSON detection files
//!
//! A file holds one frame's detections, either as an object keyed by the
//! detector's integer ids or as a plain array (ids assigned by position).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ReaderError, Result};
use crate::vision::detections::DetectionStore;
use crate::vision::text::TextBlock;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetectionFrame {
    Keyed(BTreeMap<i32, TextBlock>),
    List(Vec<TextBlock>),
}

impl DetectionFrame {
    fn into_entries(self) -> Vec<(i32, TextBlock)> {
        match self {
            Self::Keyed(map) => map.into_iter().collect(),
            Self::List(blocks) => (0..).zip(blocks).collect(),
        }
    }
}

/// Parse a detection frame from JSON text
pub fn parse_detections(json: &str, path: &Path) -> Result<Vec<(i32, TextBlock)>> {
    let frame: DetectionFrame =
        serde_json::from_str(json).map_err(|source| ReaderError::DetectionFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(frame.into_entries())
}

/// Read a detection file and publish it into a fresh store
pub fn load_detections(path: &Path) -> anyhow::Result<DetectionStore> {
    let json = std::fs::read_to_string(path)?;
    let store = DetectionStore::new();
    store.receive_detections(parse_detections(&json, path)?);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_keyed_frame() {
        let json = r#"{
            "4": {"bounds": {"top": 10, "left": 80, "bottom": 30, "right": 100}, "value": "2"},
            "9": {"bounds": {"top": 10, "left": 0, "bottom": 30, "right": 60}, "value": null}
        }"#;

        let entries = parse_detections(json, Path::new("frame.json")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 4);
        assert_eq!(entries[0].1.value.as_deref(), Some("2"));
        assert!(entries[1].1.value.is_none());
    }

    #[test]
    fn test_parse_list_frame() {
        let json = r#"[
            {"bounds": {"top": 1, "left": 2, "bottom": 3, "right": 4}, "value": "a"},
            {"bounds": {"top": 5, "left": 6, "bottom": 7, "right": 8}, "value": "b"}
        ]"#;

        let entries = parse_detections(json, Path::new("frame.json")).unwrap();
        let keys: Vec<i32> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [0, 1]);
    }

    #[test]
    fn test_parse_invalid_frame() {
        let err = parse_detections("{\"bounds\": 3}", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, ReaderError::DetectionFile { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_load_detections() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"bounds": {{"top": 0, "left": 0, "bottom": 10, "right": 10}}, "value": "x"}}]"#
        )
        .unwrap();

        let store = load_detections(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot()[0].value, "x");
    }
}

//! Latest-frame detection set shared between the detector and the UI
//!
//! The detector callback replaces the set once per frame on its own thread.
//! Readers never iterate the live map; they take a [`DetectionStore::snapshot`]
//! and work on the copy.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

use super::text::{TextBlock, TextItem};

/// Thread-safe keyed collection of the most recent frame's text blocks
#[derive(Debug, Default)]
pub struct DetectionStore {
    items: RwLock<BTreeMap<i32, TextBlock>>,
}

impl DetectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current detections with a new frame's results
    pub fn receive_detections(&self, frame: impl IntoIterator<Item = (i32, TextBlock)>) {
        let next: BTreeMap<i32, TextBlock> = frame.into_iter().collect();
        debug!("Received {} text blocks", next.len());
        *self.items.write() = next;
    }

    /// Drop all detections (e.g. when the detector is released)
    pub fn release(&self) {
        self.items.write().clear();
    }

    /// Number of raw records, including undecoded ones
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Copy the usable blocks out of the current frame, in key order
    pub fn snapshot(&self) -> Vec<TextItem> {
        let items = self.items.read();
        let snapshot: Vec<TextItem> = items
            .values()
            .cloned()
            .filter_map(TextBlock::into_item)
            .collect();

        if snapshot.len() != items.len() {
            debug!(
                "Skipped {} text blocks without decoded text",
                items.len() - snapshot.len()
            );
        }

        snapshot
    }

    /// Find the first usable block whose bounds contain the given point
    pub fn block_at(&self, x: i32, y: i32) -> Option<TextItem> {
        let items = self.items.read();
        items
            .values()
            .filter(|block| block.bounds.contains(x, y))
            .find_map(|block| block.clone().into_item())
    }
}

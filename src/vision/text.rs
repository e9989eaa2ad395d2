//! Text detection records produced by the OCR engine

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in frame pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Rect {
    /// Create a rectangle from its four edges
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Whether the point lies inside the rectangle (right/bottom edges exclusive)
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && x >= self.left
            && x < self.right
            && y >= self.top
            && y < self.bottom
    }
}

/// Raw text block as reported by the detector for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Bounding box of the block
    pub bounds: Rect,
    /// Decoded text, if the recognizer produced any
    #[serde(default)]
    pub value: Option<String>,
}

impl TextBlock {
    /// Create a block with decoded text
    pub fn new(bounds: Rect, value: impl Into<String>) -> Self {
        Self {
            bounds,
            value: Some(value.into()),
        }
    }

    /// Create a block the recognizer could not decode
    pub fn undecoded(bounds: Rect) -> Self {
        Self {
            bounds,
            value: None,
        }
    }

    /// Convert into a usable item, dropping blocks with no text
    pub fn into_item(self) -> Option<TextItem> {
        match self.value {
            Some(value) if !value.is_empty() => Some(TextItem {
                bounds: self.bounds,
                value,
            }),
            _ => None,
        }
    }
}

/// Recognized text block with a non-empty value, ready for ordering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    /// Bounding box of the block
    pub bounds: Rect,
    /// Decoded text (may contain line breaks for stacked values)
    pub value: String,
}

impl TextItem {
    pub fn new(bounds: Rect, value: impl Into<String>) -> Self {
        Self {
            bounds,
            value: value.into(),
        }
    }
}

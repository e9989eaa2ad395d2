//! Vision Layer
//!
//! Text detections handed over by the OCR engine, the shared latest-frame
//! detection set, and reading-order reconstruction over it. The camera and
//! the recognizer itself live outside this crate.

pub mod detections;
pub mod reading_order;
pub mod text;

pub use detections::DetectionStore;
pub use reading_order::{sort_reading_order, Positioned};
pub use text::{Rect, TextBlock, TextItem};

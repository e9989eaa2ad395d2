//! Receipt Reader - reading order and field extraction for OCR detections
//!
//! Takes the text blocks an OCR engine reports for a camera frame, arranges
//! them top-to-bottom and left-to-right, and maps the first three to the
//! item name, quantity and price of a receipt line.

pub mod analysis;
pub mod config;
pub mod error;
pub mod storage;
pub mod vision;

pub use analysis::{extract_fields, read_receipt, FieldPatterns, FieldValidation, ReceiptFields};
pub use error::ReaderError;
pub use vision::{sort_reading_order, DetectionStore, Positioned, Rect, TextBlock, TextItem};

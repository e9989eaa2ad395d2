//! Analysis Layer
//!
//! Turns ordered text blocks into receipt fields and checks them.

pub mod receipt;
pub mod validation;

pub use receipt::{extract_fields, read_receipt, ReceiptFields, REQUIRED_BLOCKS};
pub use validation::{FieldPatterns, FieldValidation};

//! Receipt field extraction from ordered text blocks

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ReaderError, Result};
use crate::vision::detections::DetectionStore;
use crate::vision::reading_order::sort_reading_order;
use crate::vision::text::TextItem;

/// Number of ordered blocks needed to fill every field
pub const REQUIRED_BLOCKS: usize = 3;

/// The three fields read off a receipt line
///
/// Each value is the full text of one block, so it may hold several stacked
/// entries separated by `'\n'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptFields {
    /// Item name(s)
    pub name: String,
    /// Quantity value(s)
    pub quantity: String,
    /// Price value(s)
    pub price: String,
}

impl ReceiptFields {
    /// Lines of the name field
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name.split('\n')
    }

    /// Lines of the quantity field
    pub fn quantities(&self) -> impl Iterator<Item = &str> {
        self.quantity.split('\n')
    }

    /// Lines of the price field
    pub fn prices(&self) -> impl Iterator<Item = &str> {
        self.price.split('\n')
    }
}

/// Map ordered positions 0, 1, 2 to name, quantity and price
pub fn extract_fields(ordered: &[TextItem]) -> Result<ReceiptFields> {
    let [name, quantity, price, ..] = ordered else {
        return Err(ReaderError::InsufficientDetections {
            found: ordered.len(),
            required: REQUIRED_BLOCKS,
        });
    };

    Ok(ReceiptFields {
        name: name.value.clone(),
        quantity: quantity.value.clone(),
        price: price.value.clone(),
    })
}

/// Snapshot the store, put the blocks in reading order and extract the fields
pub fn read_receipt(store: &DetectionStore) -> Result<ReceiptFields> {
    let ordered = sort_reading_order(store.snapshot());

    for item in &ordered {
        debug!(
            top = item.bounds.top,
            left = item.bounds.left,
            "Ordered block: {:?}",
            item.value
        );
    }

    let fields = extract_fields(&ordered)?;
    info!(
        "Read {} blocks - name: {:?}, quantity: {:?}, price: {:?}",
        ordered.len(),
        fields.name,
        fields.quantity,
        fields.price
    );

    Ok(fields)
}

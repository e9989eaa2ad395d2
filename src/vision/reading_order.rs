//! Reading-order reconstruction for detected text blocks
//!
//! The detector reports blocks in no particular order. This module arranges
//! them top-to-bottom and, within a line, left-to-right. A line is the set of
//! blocks whose `top` coordinates are exactly equal; no proximity band is
//! applied, so blocks one pixel apart end up on different lines.

use tracing::trace;

use super::text::TextItem;

/// Anything with a top-left anchor that can be placed in reading order
pub trait Positioned {
    fn top(&self) -> i32;
    fn left(&self) -> i32;
}

impl Positioned for TextItem {
    fn top(&self) -> i32 {
        self.bounds.top
    }

    fn left(&self) -> i32 {
        self.bounds.left
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn top(&self) -> i32 {
        (**self).top()
    }

    fn left(&self) -> i32 {
        (**self).left()
    }
}

/// Sort items into reading order by insertion.
///
/// Each item, taken in input order, is inserted before the first placed item
/// that is not strictly above it. When items on its own line are already
/// placed, it is shifted right past those with a smaller `left`, stopping at
/// the first one whose `left` is greater or equal. An item with the same
/// `(top, left)` as an existing one therefore lands in front of it.
///
/// Total and side-effect free; runs in O(n²) comparisons.
pub fn sort_reading_order<T, I>(items: I) -> Vec<T>
where
    T: Positioned,
    I: IntoIterator<Item = T>,
{
    let mut ordered: Vec<T> = Vec::new();

    for item in items {
        let top = item.top();
        let left = item.left();

        let Some(pos) = ordered.iter().position(|placed| top <= placed.top()) else {
            trace!(top, left, index = ordered.len(), "appending below all placed blocks");
            ordered.push(item);
            continue;
        };

        let count = ordered
            .iter()
            .filter(|placed| placed.top() == top)
            .take_while(|placed| left > placed.left())
            .count();

        trace!(top, left, pos, count, "inserting block");
        ordered.insert(pos + count, item);
    }

    ordered
}

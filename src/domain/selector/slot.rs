// SPDX-License-Identifier: MPL-2.0
//! Circular slot classification.
//!
//! Each item is placed relative to the current selection using circular
//! distance, so the item just before a wrap-around is still a neighbour.

/// Visual slot an item occupies relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The selected item.
    Centered,
    /// One step backward (the upper slot).
    Previous,
    /// One step forward (the lower slot), or the antipodal item of an
    /// even-length ring.
    Next,
    /// Everything else.
    Hidden,
}

/// Signed circular offset of `index` from `current` in a ring of `len` items.
///
/// The result lies in `(-len/2, len/2]`. `len` must be non-zero.
#[must_use]
pub fn relative_offset(index: usize, current: usize, len: usize) -> isize {
    debug_assert!(len > 0, "relative_offset on an empty ring");
    let n = len as isize;
    let raw = (index as isize - current as isize).rem_euclid(n);
    if raw * 2 > n {
        raw - n
    } else {
        raw
    }
}

/// Classifies `index` relative to `current`.
///
/// On an even-length ring the antipodal item (offset exactly `len/2`) is
/// `Next`; this tie-break is fixed.
#[must_use]
pub fn classify(index: usize, current: usize, len: usize) -> Slot {
    let offset = relative_offset(index, current, len);
    match offset {
        0 => Slot::Centered,
        -1 => Slot::Previous,
        1 => Slot::Next,
        o if len % 2 == 0 && o * 2 == len as isize => Slot::Next,
        _ => Slot::Hidden,
    }
}

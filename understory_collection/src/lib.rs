// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Collection: navigable item sequences and a roving focus cursor.
//!
//! This crate models the "which item is active" half of a composite widget
//! (listbox, menubar, toolbar, feed, carousel) as two small pieces:
//!
//! - An **item registry** ([`AvailableSequence`]) built from host-supplied
//!   [`NavigableItem`]s. Disabled items are filtered out so that every
//!   navigation operation works over the enabled items only, and an
//!   `id → position` map gives constant-time lookups.
//! - A **focus cursor** ([`FocusCursor`]) tracking the active position within
//!   that sequence plus the selection anchor used for range extension. Moves
//!   honor a [`Boundary`] policy: clamp at the edges (listbox, table rows) or
//!   wrap around (menubar, toolbar, carousel).
//!
//! The active position is the controller's source of truth. Host views treat
//! DOM focus and `tabindex` as a projection of it.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_collection::{
//!     AnchorUpdate, AvailableSequence, Boundary, FocusCursor, NavigableItem,
//! };
//!
//! let seq = AvailableSequence::new(vec![
//!     NavigableItem::new("red", "Red"),
//!     NavigableItem::new("green", "Green").disabled(true),
//!     NavigableItem::new("blue", "Blue"),
//! ]);
//! // The disabled item is not part of the navigable sequence.
//! assert_eq!(seq.len(), 2);
//!
//! let mut cursor = FocusCursor::new(seq.len());
//! assert_eq!(cursor.index(), Some(0));
//!
//! // Moving forward skips "green" transparently.
//! let idx = cursor.move_by_policy(1, seq.len(), Boundary::Clamp, AnchorUpdate::Reset);
//! assert_eq!(idx.and_then(|i| seq.id_at(i)), Some(&"blue"));
//!
//! // Clamping keeps us at the end…
//! assert_eq!(cursor.move_by(1, seq.len(), AnchorUpdate::Reset), Some(1));
//! // …while wrapping returns to the start.
//! assert_eq!(cursor.move_by_wrapping(1, seq.len(), AnchorUpdate::Reset), Some(0));
//! ```
//!
//! The core types are generic over the item identifier `K`, so callers can use
//! string ids, interned symbols, or any small hashable handle.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cursor;
mod sequence;

pub use cursor::{AnchorUpdate, Boundary, FocusCursor};
pub use sequence::{AvailableSequence, NavigableItem};

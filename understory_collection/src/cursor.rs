// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus cursor: the active (roving-tabindex) position and selection anchor.

/// Boundary policy for relative moves.
///
/// Patterns disagree on what happens at the ends of a collection, so the
/// policy is chosen per widget instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Stop at the first/last item (listbox, table rows, feed).
    #[default]
    Clamp,
    /// Continue from the opposite end (menubar, toolbar, carousel).
    Wrap,
}

/// Whether a move resets the selection anchor.
///
/// Plain focus moves reset the anchor to the new position. Range extensions
/// (Shift + navigation) keep it so the range is measured from where the user
/// started.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnchorUpdate {
    /// Set the anchor to the new active position.
    Reset,
    /// Leave the anchor where it is.
    Keep,
}

/// Tracks the active position within an available sequence of length `len`.
///
/// Every method takes the current sequence length rather than borrowing the
/// sequence, so the cursor can be stored next to it without lifetimes. All
/// moves are no-ops returning `None` when `len == 0`. A stale index (for
/// example after the sequence shrank between two key repeats) is clamped
/// into range before the move is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusCursor {
    index: Option<usize>,
    anchor: Option<usize>,
}

impl FocusCursor {
    /// Create a cursor at the start of a sequence of length `len`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let index = (len > 0).then_some(0);
        Self {
            index,
            anchor: index,
        }
    }

    /// Create a cursor at `index`, clamped into range.
    #[must_use]
    pub fn at(index: usize, len: usize) -> Self {
        let index = clamp_index(index, len);
        Self {
            index,
            anchor: index,
        }
    }

    /// The active position, or `None` if the sequence is empty.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// The selection anchor.
    #[must_use]
    pub const fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Set the anchor explicitly (for example to the active item after a toggle).
    pub fn set_anchor(&mut self, anchor: Option<usize>, len: usize) {
        self.anchor = anchor.and_then(|a| clamp_index(a, len));
    }

    /// Re-establish the cursor invariants after the sequence changed.
    ///
    /// The active position is clamped into `[0, len - 1]`; a non-empty
    /// sequence with no active position starts at `0`.
    pub fn sync(&mut self, len: usize) -> Option<usize> {
        self.index = match self.index {
            Some(i) => clamp_index(i, len),
            None => (len > 0).then_some(0),
        };
        self.anchor = match self.anchor {
            Some(a) => clamp_index(a, len),
            None => self.index,
        };
        self.index
    }

    /// Replace the active position and anchor wholesale, e.g. after remapping
    /// both through an item update.
    pub fn restore(&mut self, index: Option<usize>, anchor: Option<usize>, len: usize) {
        self.index = index.and_then(|i| clamp_index(i, len));
        self.anchor = anchor.and_then(|a| clamp_index(a, len));
        self.sync(len);
    }

    /// Move by `delta`, stopping at the edges.
    pub fn move_by(&mut self, delta: isize, len: usize, anchor: AnchorUpdate) -> Option<usize> {
        let current = self.current(len)?;
        let last = len - 1;
        let target = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs()).min(last)
        };
        self.commit(target, anchor)
    }

    /// Move by `delta`, continuing from the opposite end past either edge.
    pub fn move_by_wrapping(
        &mut self,
        delta: isize,
        len: usize,
        anchor: AnchorUpdate,
    ) -> Option<usize> {
        let current = self.current(len)?;
        let len_i = isize::try_from(len).ok()?;
        let current_i = isize::try_from(current).ok()?;
        let wrapped = (current_i + delta % len_i).rem_euclid(len_i);
        let target = usize::try_from(wrapped).ok()?;
        self.commit(target, anchor)
    }

    /// Move by `delta` according to `boundary`.
    pub fn move_by_policy(
        &mut self,
        delta: isize,
        len: usize,
        boundary: Boundary,
        anchor: AnchorUpdate,
    ) -> Option<usize> {
        match boundary {
            Boundary::Clamp => self.move_by(delta, len, anchor),
            Boundary::Wrap => self.move_by_wrapping(delta, len, anchor),
        }
    }

    /// Move to the first position.
    pub fn move_to_start(&mut self, len: usize, anchor: AnchorUpdate) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.commit(0, anchor)
    }

    /// Move to the last position.
    pub fn move_to_end(&mut self, len: usize, anchor: AnchorUpdate) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.commit(len - 1, anchor)
    }

    /// Jump to a resolved position (type-ahead, pointer, programmatic focus).
    ///
    /// Out-of-range positions are ignored and leave the cursor unchanged.
    pub fn move_to_match(
        &mut self,
        index: usize,
        len: usize,
        anchor: AnchorUpdate,
    ) -> Option<usize> {
        if index >= len {
            return None;
        }
        self.commit(index, anchor)
    }

    fn current(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            self.index = None;
            self.anchor = None;
            return None;
        }
        let current = self.index.map_or(0, |i| i.min(len - 1));
        self.index = Some(current);
        Some(current)
    }

    fn commit(&mut self, target: usize, anchor: AnchorUpdate) -> Option<usize> {
        self.index = Some(target);
        match anchor {
            AnchorUpdate::Reset => self.anchor = Some(target),
            AnchorUpdate::Keep => {
                if self.anchor.is_none() {
                    self.anchor = Some(target);
                }
            }
        }
        Some(target)
    }
}

fn clamp_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| index.min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut cursor = FocusCursor::new(0);
        assert_eq!(cursor.index(), None);
        assert_eq!(cursor.move_by(1, 0, AnchorUpdate::Reset), None);
        assert_eq!(cursor.move_by_wrapping(-1, 0, AnchorUpdate::Reset), None);
        assert_eq!(cursor.move_to_start(0, AnchorUpdate::Reset), None);
        assert_eq!(cursor.move_to_end(0, AnchorUpdate::Reset), None);
        assert_eq!(cursor.move_to_match(0, 0, AnchorUpdate::Reset), None);
        assert_eq!(cursor.index(), None);
    }

    #[test]
    fn clamp_stops_at_edges() {
        let mut cursor = FocusCursor::at(2, 3);
        assert_eq!(cursor.move_by(1, 3, AnchorUpdate::Reset), Some(2));
        cursor.move_to_start(3, AnchorUpdate::Reset);
        assert_eq!(cursor.move_by(-1, 3, AnchorUpdate::Reset), Some(0));
        // Large deltas clamp too.
        assert_eq!(cursor.move_by(100, 3, AnchorUpdate::Reset), Some(2));
        assert_eq!(cursor.move_by(isize::MIN, 3, AnchorUpdate::Reset), Some(0));
    }

    #[test]
    fn wrap_continues_from_opposite_end() {
        let mut cursor = FocusCursor::at(2, 3);
        assert_eq!(cursor.move_by_wrapping(1, 3, AnchorUpdate::Reset), Some(0));
        assert_eq!(cursor.move_by_wrapping(-1, 3, AnchorUpdate::Reset), Some(2));
        assert_eq!(cursor.move_by_wrapping(7, 3, AnchorUpdate::Reset), Some(0));
        assert_eq!(cursor.move_by_wrapping(isize::MIN, 3, AnchorUpdate::Reset), Some(1));
    }

    #[test]
    fn policy_selects_behavior() {
        let mut cursor = FocusCursor::at(1, 2);
        assert_eq!(
            cursor.move_by_policy(1, 2, Boundary::Clamp, AnchorUpdate::Reset),
            Some(1)
        );
        assert_eq!(
            cursor.move_by_policy(1, 2, Boundary::Wrap, AnchorUpdate::Reset),
            Some(0)
        );
    }

    #[test]
    fn move_to_start_is_idempotent() {
        let mut cursor = FocusCursor::at(3, 5);
        let once = cursor.move_to_start(5, AnchorUpdate::Reset);
        let twice = cursor.move_to_start(5, AnchorUpdate::Reset);
        assert_eq!(once, twice);
        assert_eq!(cursor.index(), Some(0));
    }

    #[test]
    fn anchor_follows_plain_moves_only() {
        let mut cursor = FocusCursor::at(1, 5);
        cursor.move_by(1, 5, AnchorUpdate::Keep);
        cursor.move_by(1, 5, AnchorUpdate::Keep);
        assert_eq!(cursor.index(), Some(3));
        assert_eq!(cursor.anchor(), Some(1));

        cursor.move_to_end(5, AnchorUpdate::Reset);
        assert_eq!(cursor.anchor(), Some(4));
    }

    #[test]
    fn match_ignores_out_of_range() {
        let mut cursor = FocusCursor::at(1, 3);
        assert_eq!(cursor.move_to_match(5, 3, AnchorUpdate::Reset), None);
        assert_eq!(cursor.index(), Some(1));
        assert_eq!(cursor.move_to_match(2, 3, AnchorUpdate::Reset), Some(2));
        assert_eq!(cursor.anchor(), Some(2));
    }

    #[test]
    fn stale_index_is_clamped_before_moving() {
        let mut cursor = FocusCursor::at(9, 10);
        // The sequence shrank to 4 without a sync.
        assert_eq!(cursor.move_by(-1, 4, AnchorUpdate::Reset), Some(2));
    }

    #[test]
    fn sync_tracks_length_changes() {
        let mut cursor = FocusCursor::new(0);
        assert_eq!(cursor.sync(3), Some(0));
        assert_eq!(cursor.anchor(), Some(0));
        cursor.move_to_end(3, AnchorUpdate::Reset);
        assert_eq!(cursor.sync(2), Some(1));
        assert_eq!(cursor.sync(0), None);
        assert_eq!(cursor.anchor(), None);
    }
}

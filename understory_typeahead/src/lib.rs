// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Type-ahead: jump to an item by typing the start of its label.
//!
//! [`Typeahead`] accumulates recently typed characters and resolves them to
//! the next item whose label starts with them (case-insensitively).
//!
//! ## Matching rules
//!
//! 1. Each printable key appends its lowercased character to the buffer.
//! 2. If the buffer is now the same character repeated (`"aa"`, `"bbb"`), the
//!    press is a **cycle request**: the buffer collapses to that single
//!    character and the search starts *after* the current item, so repeated
//!    presses step through every item sharing that initial.
//! 3. Otherwise the whole buffer is searched as a prefix starting *at* the
//!    current item, wrapping around the sequence once.
//! 4. The buffer is cleared after an inactivity window (default
//!    [`DEFAULT_TIMEOUT_MS`]); every keystroke pushes the deadline back.
//!
//! ## Time
//!
//! Like the pointer state machines elsewhere in Understory, this crate never
//! reads a clock. Callers pass event timestamps in milliseconds. A keystroke
//! arriving after the deadline starts a fresh buffer, so hosts that never run
//! a timer still get correct behavior.
//!
//! Hosts that want the buffer cleared eagerly (for example to hide a
//! "typed so far" hint) schedule a timer from [`Typeahead::pending_clear`] and
//! call [`Typeahead::fire`] with that handle when it elapses. A newer
//! keystroke replaces the handle, so a stale timer firing late is ignored;
//! this is how cancellation works without owning a timer.
//!
//! ```rust
//! use understory_typeahead::Typeahead;
//!
//! let labels = ["Apple", "Apricot", "Banana"];
//! let mut ta = Typeahead::new();
//!
//! // "a" matches the current item (Apple)…
//! assert_eq!(ta.push('a', 0, Some(0), &labels[..]), Some(0));
//! // …and pressing it again cycles to the next item starting with "a".
//! assert_eq!(ta.push('a', 100, Some(0), &labels[..]), Some(1));
//!
//! // After the window elapses, "b" starts a new search.
//! assert_eq!(ta.push('b', 2_000, Some(1), &labels[..]), Some(2));
//!
//! // Stale timer handles are ignored.
//! let pending = ta.pending_clear().unwrap();
//! ta.push('a', 2_100, Some(2), &labels[..]);
//! assert!(!ta.fire(pending));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod labels;

use smallvec::SmallVec;

pub use labels::LabelSource;

/// Default inactivity window after which the buffer clears, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Handle for a scheduled buffer clear.
///
/// Hosts arm a timer for [`PendingClear::deadline`] and hand the handle back
/// to [`Typeahead::fire`]. Handles are compared by generation, so only the
/// most recently issued one has any effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PendingClear {
    /// Timestamp (ms) at or after which the buffer should clear.
    pub deadline: u64,
    generation: u64,
}

/// Type-ahead buffer and matcher.
#[derive(Clone, Debug)]
pub struct Typeahead {
    buffer: SmallVec<[char; 16]>,
    /// Inactivity window in milliseconds.
    timeout: u64,
    pending: Option<PendingClear>,
    generation: u64,
}

impl Typeahead {
    /// Create a matcher with the default 500 ms window.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    /// Create a matcher with a custom inactivity window in milliseconds.
    #[must_use]
    pub fn with_timeout(timeout: u64) -> Self {
        Self {
            buffer: SmallVec::new(),
            timeout,
            pending: None,
            generation: 0,
        }
    }

    /// The inactivity window in milliseconds.
    #[must_use]
    pub const fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Characters typed so far (lowercased).
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// Returns `true` while a search is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// The currently scheduled clear, if any.
    #[must_use]
    pub const fn pending_clear(&self) -> Option<PendingClear> {
        self.pending
    }

    /// Record a typed character and resolve it against `labels`.
    ///
    /// - `now`: event timestamp in milliseconds.
    /// - `current`: position of the active item, if any.
    ///
    /// Returns the position of the first matching label, or `None` if
    /// nothing matches (the caller should leave focus where it is).
    pub fn push<L>(
        &mut self,
        ch: char,
        now: u64,
        current: Option<usize>,
        labels: &L,
    ) -> Option<usize>
    where
        L: LabelSource + ?Sized,
    {
        self.expire(now);
        self.buffer.extend(ch.to_lowercase());
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(PendingClear {
            deadline: now.saturating_add(self.timeout),
            generation: self.generation,
        });

        let len = labels.label_count();
        if len == 0 {
            return None;
        }
        let current = current.map(|c| c.min(len - 1));

        let found = if self.is_cycle() {
            self.buffer.truncate(1);
            let start = current.map_or(0, |c| (c + 1) % len);
            find_prefix(labels, &self.buffer, start, len)
        } else {
            find_prefix(labels, &self.buffer, current.unwrap_or(0), len)
        };
        tracing::trace!(buffer_len = self.buffer.len(), ?found, "typeahead resolved");
        found
    }

    /// Clear the buffer if its deadline has passed at `now`.
    ///
    /// Returns `true` if the buffer was cleared.
    pub fn expire(&mut self, now: u64) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Clear the buffer in response to a host timer scheduled from `pending`.
    ///
    /// Returns `false` (and does nothing) if a newer keystroke superseded the
    /// handle.
    pub fn fire(&mut self, pending: PendingClear) -> bool {
        if self.pending != Some(pending) {
            return false;
        }
        self.clear();
        true
    }

    /// Drop the buffer and any scheduled clear.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.pending = None;
    }

    fn is_cycle(&self) -> bool {
        match self.buffer.split_first() {
            Some((first, rest)) => !rest.is_empty() && rest.iter().all(|c| c == first),
            None => false,
        }
    }
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new()
    }
}

/// First position at or after `start` (wrapping once) whose label starts with `prefix`.
fn find_prefix<L>(labels: &L, prefix: &[char], start: usize, len: usize) -> Option<usize>
where
    L: LabelSource + ?Sized,
{
    (0..len)
        .map(|offset| (start + offset) % len)
        .find(|&pos| labels.label_at(pos).is_some_and(|label| has_prefix(label, prefix)))
}

fn has_prefix(label: &str, prefix: &[char]) -> bool {
    let mut chars = label.trim_start().chars().flat_map(char::to_lowercase);
    prefix.iter().all(|p| chars.next() == Some(*p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    const FRUIT: [&str; 3] = ["Apple", "Apricot", "Banana"];

    #[test]
    fn repeated_character_cycles() {
        let mut ta = Typeahead::new();
        assert_eq!(ta.push('a', 0, Some(0), &FRUIT[..]), Some(0));
        assert_eq!(ta.push('a', 10, Some(0), &FRUIT[..]), Some(1));
        assert_eq!(ta.buffer(), ['a']);
        // A third press wraps back around to Apple.
        assert_eq!(ta.push('a', 20, Some(1), &FRUIT[..]), Some(0));
    }

    #[test]
    fn multi_character_prefix_searches_from_current() {
        let mut ta = Typeahead::new();
        assert_eq!(ta.push('a', 0, Some(0), &FRUIT[..]), Some(0));
        assert_eq!(ta.push('p', 10, Some(0), &FRUIT[..]), Some(0));
        assert_eq!(ta.push('r', 20, Some(0), &FRUIT[..]), Some(1));
        assert_eq!(ta.buffer(), ['a', 'p', 'r']);
    }

    #[test]
    fn same_prefix_after_timeout_rematches_current() {
        let mut ta = Typeahead::new();
        ta.push('a', 0, Some(1), &FRUIT[..]);
        assert_eq!(ta.push('p', 10, Some(1), &FRUIT[..]), Some(1));
        // Window elapses; typing "ap" again stays on Apricot.
        ta.push('a', 1_000, Some(1), &FRUIT[..]);
        assert_eq!(ta.push('p', 1_010, Some(1), &FRUIT[..]), Some(1));
    }

    #[test]
    fn search_wraps_around_once() {
        let mut ta = Typeahead::new();
        assert_eq!(ta.push('A', 0, Some(2), &FRUIT[..]), Some(0));
    }

    #[test]
    fn no_match_returns_none() {
        let mut ta = Typeahead::new();
        assert_eq!(ta.push('z', 0, Some(1), &FRUIT[..]), None);
        assert!(ta.is_active());
        // Continuing a failed search does not suddenly match.
        assert_eq!(ta.push('a', 10, Some(1), &FRUIT[..]), None);
    }

    #[test]
    fn empty_labels_never_match() {
        let mut ta = Typeahead::new();
        let empty: [&str; 0] = [];
        assert_eq!(ta.push('a', 0, None, &empty[..]), None);
    }

    #[test]
    fn expire_clears_after_window() {
        let mut ta = Typeahead::with_timeout(300);
        ta.push('b', 100, None, &FRUIT[..]);
        assert!(!ta.expire(399));
        assert!(ta.is_active());
        assert!(ta.expire(400));
        assert!(!ta.is_active());
        assert_eq!(ta.pending_clear(), None);
    }

    #[test]
    fn each_keystroke_replaces_the_pending_clear() {
        let mut ta = Typeahead::new();
        ta.push('a', 0, Some(0), &FRUIT[..]);
        let first = ta.pending_clear().unwrap();
        ta.push('p', 400, Some(0), &FRUIT[..]);
        let second = ta.pending_clear().unwrap();
        assert_eq!(second.deadline, 900);

        // The first timer was cancelled by the second keystroke.
        assert!(!ta.fire(first));
        assert!(ta.is_active());
        assert!(ta.fire(second));
        assert!(!ta.is_active());
        assert!(!ta.fire(second));
    }

    #[test]
    fn matching_is_case_insensitive_and_trims_leading_space() {
        let labels: Vec<&str> = vec!["  Éclair", "eggplant", "ÉPOISSES"];
        let mut ta = Typeahead::new();
        assert_eq!(ta.push('É', 0, Some(1), &labels), Some(2));
        assert_eq!(ta.push('c', 10, Some(2), &labels), Some(0));
    }

    #[test]
    fn stale_current_is_clamped() {
        let mut ta = Typeahead::new();
        assert_eq!(ta.push('b', 0, Some(42), &FRUIT[..]), Some(2));
    }
}

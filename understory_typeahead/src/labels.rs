// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random-access label lookup for the matcher.

use alloc::vec::Vec;

/// A read-only, position-indexed view of item labels.
///
/// Positions must be stable for the duration of a single
/// [`Typeahead::push`](crate::Typeahead::push) call. Implemented for slices
/// and vectors of anything string-like; collection types provide their own
/// adapters.
pub trait LabelSource {
    /// Number of labels.
    fn label_count(&self) -> usize;

    /// Label at `index`, or `None` if out of range.
    fn label_at(&self, index: usize) -> Option<&str>;
}

impl<T: AsRef<str>> LabelSource for [T] {
    fn label_count(&self) -> usize {
        self.len()
    }

    fn label_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<T: AsRef<str>> LabelSource for Vec<T> {
    fn label_count(&self) -> usize {
        self.len()
    }

    fn label_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The roving controller: one per rendered composite widget.

use core::hash::Hash;

use smallvec::SmallVec;
use understory_collection::{AnchorUpdate, AvailableSequence, Boundary, FocusCursor, NavigableItem};
use understory_selection::{Selection, SelectionMode};
use understory_typeahead::{LabelSource, PendingClear, Typeahead};

use crate::aria::{ContainerState, ItemState, TabIndex};
use crate::config::RovingConfig;
use crate::dispatch::{Action, classify};
use crate::key::{KeyEvent, Modifiers};

/// A state change the host should react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerEvent<K> {
    /// The active item changed; move DOM focus and re-render `tabindex`.
    FocusChanged {
        /// Id of the new active item.
        id: K,
        /// Its position in the available sequence.
        index: usize,
    },
    /// Nothing is navigable any more (the items were emptied or all
    /// disabled); no item carries `tabindex="0"`.
    FocusCleared,
    /// The selection changed; re-render the selection attribute and notify
    /// `onSelectionChange` with [`RovingController::selected_ids`].
    ///
    /// Never emitted for patterns without a
    /// [`SelectionAttribute`](crate::SelectionAttribute).
    SelectionChanged,
}

/// The result of one controller operation.
///
/// An empty commit means nothing observable changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit<K> {
    events: SmallVec<[ControllerEvent<K>; 2]>,
}

impl<K> Commit<K> {
    fn empty() -> Self {
        Self {
            events: SmallVec::new(),
        }
    }

    /// Events in the order they should be delivered.
    pub fn events(&self) -> &[ControllerEvent<K>] {
        &self.events
    }

    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The new active item, if focus moved.
    pub fn focus_change(&self) -> Option<(&K, usize)> {
        self.events.iter().find_map(|event| match event {
            ControllerEvent::FocusChanged { id, index } => Some((id, *index)),
            ControllerEvent::FocusCleared | ControllerEvent::SelectionChanged => None,
        })
    }

    /// Returns `true` if the selection changed.
    pub fn selection_changed(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, ControllerEvent::SelectionChanged))
    }
}

/// Whether the widget consumed an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<K> {
    /// The widget handled the event; the host must prevent the browser
    /// default (scrolling, text selection, …).
    Handled(Commit<K>),
    /// Not for this widget; let the event through untouched.
    Ignored,
}

impl<K> Outcome<K> {
    /// Returns `true` if the host should prevent the default action.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// The commit, if the event was handled.
    pub fn commit(&self) -> Option<&Commit<K>> {
        match self {
            Self::Handled(commit) => Some(commit),
            Self::Ignored => None,
        }
    }
}

/// Navigation, selection, and type-ahead state for one composite widget.
///
/// The controller owns the active index; DOM focus and `tabindex` are
/// projections the host synchronizes from [`Commit`]s and
/// [`RovingController::item_states`]. All operations are synchronous and
/// complete every derived update (index, selection, anchor) before
/// returning. Operations on an empty or all-disabled collection are no-ops.
#[derive(Clone, Debug)]
pub struct RovingController<K> {
    config: RovingConfig,
    sequence: AvailableSequence<K>,
    cursor: FocusCursor,
    selection: Selection<K>,
    typeahead: Option<Typeahead>,
}

impl<K: Clone + Eq + Hash> RovingController<K> {
    /// Create a controller focused on the first available item.
    ///
    /// In single-select mode that item is also selected.
    pub fn new(config: RovingConfig, items: impl IntoIterator<Item = NavigableItem<K>>) -> Self {
        let sequence = AvailableSequence::new(items.into_iter().collect());
        let cursor = FocusCursor::new(sequence.len());
        let mut controller = Self {
            config,
            sequence,
            cursor,
            selection: Selection::new(config.mode),
            typeahead: config.typeahead.map(Typeahead::with_timeout),
        };
        controller.follow_focus();
        controller
    }

    /// Create a controller with an initial selection.
    ///
    /// Focus starts on the first selected item in collection order, falling
    /// back to the first available item.
    pub fn with_selected(
        config: RovingConfig,
        items: impl IntoIterator<Item = NavigableItem<K>>,
        selected: impl IntoIterator<Item = K>,
    ) -> Self {
        let mut controller = Self::new(config, items);
        controller.set_selected(selected);
        if let Some(first) = controller
            .selection
            .ids_in_order(&controller.sequence)
            .next()
            .and_then(|id| controller.sequence.position_of(id))
        {
            let len = controller.sequence.len();
            controller
                .cursor
                .move_to_match(first, len, AnchorUpdate::Reset);
        }
        controller
    }

    /// The configuration.
    pub fn config(&self) -> &RovingConfig {
        &self.config
    }

    /// The current navigable sequence.
    pub fn sequence(&self) -> &AvailableSequence<K> {
        &self.sequence
    }

    /// Position of the active item, or `None` if nothing is navigable.
    pub fn active_index(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Id of the active item.
    pub fn active_id(&self) -> Option<&K> {
        self.cursor.index().and_then(|i| self.sequence.id_at(i))
    }

    /// The selection anchor used for Shift ranges.
    pub fn anchor(&self) -> Option<usize> {
        self.cursor.anchor()
    }

    /// The selection store.
    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids in collection order, for `onSelectionChange`.
    pub fn selected_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.selection.ids_in_order(&self.sequence)
    }

    /// Characters typed into type-ahead so far.
    pub fn typeahead_buffer(&self) -> &[char] {
        match &self.typeahead {
            Some(ta) => ta.buffer(),
            None => &[],
        }
    }

    /// The scheduled type-ahead clear, for hosts that run a real timer.
    pub fn pending_typeahead_clear(&self) -> Option<PendingClear> {
        self.typeahead.as_ref().and_then(Typeahead::pending_clear)
    }

    /// Clear the type-ahead buffer if its window elapsed at `now`.
    pub fn expire_typeahead(&mut self, now: u64) -> bool {
        self.typeahead.as_mut().is_some_and(|ta| ta.expire(now))
    }

    /// Clear the type-ahead buffer from a host timer; stale handles are ignored.
    pub fn fire_typeahead_clear(&mut self, pending: PendingClear) -> bool {
        self.typeahead.as_mut().is_some_and(|ta| ta.fire(pending))
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Outcome<K> {
        let Some(action) = classify(event, &self.config) else {
            return Outcome::Ignored;
        };
        let commit = self.apply(action, event.timestamp);
        tracing::debug!(
            ?action,
            active = ?self.cursor.index(),
            events = commit.events.len(),
            "key dispatched"
        );
        Outcome::Handled(commit)
    }

    /// Apply an already classified action.
    ///
    /// Multi-select actions are no-ops in single-select mode.
    pub fn apply(&mut self, action: Action, now: u64) -> Commit<K> {
        let before = self.cursor.index();
        let len = self.sequence.len();
        let selection_changed = match action {
            Action::Move { delta, extend } => {
                // Range extension never wraps past an edge.
                let boundary = if extend {
                    Boundary::Clamp
                } else {
                    self.config.boundary
                };
                let moved = self
                    .cursor
                    .move_by_policy(delta, len, boundary, anchor_update(extend));
                self.after_move(moved, extend)
            }
            Action::Start { extend } => {
                let moved = self.cursor.move_to_start(len, anchor_update(extend));
                self.after_move(moved, extend)
            }
            Action::End { extend } => {
                let moved = self.cursor.move_to_end(len, anchor_update(extend));
                self.after_move(moved, extend)
            }
            Action::Toggle => match (&mut self.selection, self.cursor.index()) {
                (Selection::Multi(multi), Some(active)) => match self.sequence.id_at(active) {
                    Some(id) => {
                        multi.toggle(id.clone());
                        true
                    }
                    None => false,
                },
                _ => false,
            },
            Action::ExtendToActive => match &mut self.selection {
                Selection::Multi(multi) => match (self.cursor.anchor(), self.cursor.index()) {
                    (Some(anchor), Some(active)) => {
                        multi.extend_range(anchor, active, &self.sequence)
                    }
                    _ => false,
                },
                Selection::Single(_) => false,
            },
            Action::SelectAll => match &mut self.selection {
                Selection::Multi(multi) => multi.select_all(&self.sequence),
                Selection::Single(_) => false,
            },
            Action::Typeahead(ch) => {
                let found = match &mut self.typeahead {
                    Some(ta) => ta.push(ch, now, before, &SequenceLabels(&self.sequence)),
                    None => None,
                };
                match found {
                    Some(pos) => {
                        let moved = self.cursor.move_to_match(pos, len, AnchorUpdate::Reset);
                        self.after_move(moved, false)
                    }
                    None => false,
                }
            }
            Action::Consume => false,
        };
        self.finish(before, selection_changed)
    }

    /// Handle a pointer activation on `id`.
    ///
    /// - Single-select: focus and select the item.
    /// - Multi-select: Shift extends the range from the anchor to the item;
    ///   otherwise the item's selection toggles (Ctrl/Cmd+click included).
    ///
    /// Disabled and unknown ids are ignored.
    pub fn click(&mut self, id: &K, modifiers: Modifiers) -> Outcome<K> {
        let Some(pos) = self.sequence.position_of(id) else {
            return Outcome::Ignored;
        };
        let before = self.cursor.index();
        let len = self.sequence.len();
        let selection_changed = match &mut self.selection {
            Selection::Single(single) => {
                self.cursor.move_to_match(pos, len, AnchorUpdate::Reset);
                single.replace(id.clone())
            }
            Selection::Multi(multi) if modifiers.shift() => {
                self.cursor.move_to_match(pos, len, AnchorUpdate::Keep);
                match self.cursor.anchor() {
                    Some(anchor) => multi.extend_range(anchor, pos, &self.sequence),
                    None => false,
                }
            }
            Selection::Multi(multi) => {
                self.cursor.move_to_match(pos, len, AnchorUpdate::Reset);
                multi.toggle(id.clone());
                true
            }
        };
        let commit = self.finish(before, selection_changed);
        tracing::debug!(index = pos, events = commit.events.len(), "click dispatched");
        Outcome::Handled(commit)
    }

    /// Move focus to `id` programmatically (selection follows in single mode).
    pub fn focus_id(&mut self, id: &K) -> Commit<K> {
        match self.sequence.position_of(id) {
            Some(pos) => self.focus_index(pos),
            None => Commit::empty(),
        }
    }

    /// Move focus to a position programmatically. Out-of-range positions are ignored.
    pub fn focus_index(&mut self, index: usize) -> Commit<K> {
        let before = self.cursor.index();
        let moved = self
            .cursor
            .move_to_match(index, self.sequence.len(), AnchorUpdate::Reset);
        let selection_changed = self.after_move(moved, false);
        self.finish(before, selection_changed)
    }

    /// Replace the selection with host-owned state.
    ///
    /// Unknown and disabled ids are dropped. In single-select mode focus moves
    /// to the first given id that is available, keeping selection and focus
    /// in step; if none is available nothing changes.
    pub fn set_selected(&mut self, ids: impl IntoIterator<Item = K>) -> Commit<K> {
        if self.selection.mode() == SelectionMode::Single {
            let first = ids.into_iter().find(|id| self.sequence.contains(id));
            return match first {
                Some(id) => self.focus_id(&id),
                None => Commit::empty(),
            };
        }
        let sequence = &self.sequence;
        let changed = match &mut self.selection {
            Selection::Multi(multi) => {
                multi.set(ids.into_iter().filter(|id| sequence.contains(id)))
            }
            Selection::Single(_) => false,
        };
        self.finish(self.cursor.index(), changed)
    }

    /// Replace the host items.
    ///
    /// Focus and the anchor stay on the same ids when they are still
    /// available. If the active item was removed or disabled, focus stays at
    /// the same position (clamped). Selections of unavailable ids are
    /// dropped.
    ///
    /// A focus event is reported whenever the active id or its position
    /// changed, and [`ControllerEvent::FocusCleared`] when nothing is left to
    /// focus.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = NavigableItem<K>>) -> Commit<K> {
        let next = AvailableSequence::new(items.into_iter().collect());
        let old_index = self.cursor.index();
        let old_active = self.active_id().cloned();
        let index = old_index
            .and_then(|i| next.remap_from(&self.sequence, i))
            .or(old_index);
        let anchor = self
            .cursor
            .anchor()
            .and_then(|a| next.remap_from(&self.sequence, a));

        self.sequence = next;
        self.cursor.restore(index, anchor, self.sequence.len());
        let mut selection_changed = self.selection.retain_available(&self.sequence);
        selection_changed |= self.follow_focus();

        let mut commit = Commit::empty();
        if self.cursor.index() != old_index || self.active_id() != old_active.as_ref() {
            self.push_focus_event(&mut commit);
        }
        self.push_selection_event(&mut commit, selection_changed);
        tracing::debug!(
            len = self.sequence.len(),
            active = ?self.cursor.index(),
            "items replaced"
        );
        commit
    }

    /// Render state for every host item, disabled ones included, in source order.
    ///
    /// Exactly one item is [`TabIndex::Active`] whenever the collection has
    /// any navigable item.
    pub fn item_states(&self) -> impl Iterator<Item = ItemState<'_, K>> + '_ {
        (0..self.sequence.items().len()).filter_map(move |source| self.item_state(source))
    }

    /// Render state for the item at a source index.
    ///
    /// `selected` is always `false` for patterns without a selection
    /// attribute.
    pub fn item_state(&self, source_index: usize) -> Option<ItemState<'_, K>> {
        let item = self.sequence.items().get(source_index)?;
        let pos = self.sequence.position_of_source(source_index);
        let active = pos.is_some() && pos == self.cursor.index();
        Some(ItemState {
            id: &item.id,
            source_index,
            tab_index: if active {
                TabIndex::Active
            } else {
                TabIndex::Inactive
            },
            selected: pos.is_some()
                && self.reports_selection()
                && self.selection.contains(&item.id),
            disabled: item.disabled,
        })
    }

    /// Render state for the container.
    pub fn container_state(&self) -> ContainerState {
        ContainerState {
            orientation: self.config.orientation,
            multiselectable: self.config.mode == SelectionMode::Multi,
        }
    }

    /// Couple selection to a completed move; returns whether selection changed.
    fn after_move(&mut self, moved: Option<usize>, extend: bool) -> bool {
        let Some(pos) = moved else {
            return false;
        };
        match &mut self.selection {
            Selection::Single(single) => self
                .sequence
                .id_at(pos)
                .is_some_and(|id| single.replace(id.clone())),
            Selection::Multi(multi) if extend => match self.cursor.anchor() {
                Some(anchor) => multi.extend_range(anchor, pos, &self.sequence),
                None => false,
            },
            Selection::Multi(_) => false,
        }
    }

    /// In single-select mode, select the active item (or clear if none).
    fn follow_focus(&mut self) -> bool {
        match &mut self.selection {
            Selection::Single(single) => {
                match self.cursor.index().and_then(|i| self.sequence.id_at(i)) {
                    Some(id) => single.replace(id.clone()),
                    None => single.clear(),
                }
            }
            Selection::Multi(_) => false,
        }
    }

    fn finish(&self, before: Option<usize>, selection_changed: bool) -> Commit<K> {
        let mut commit = Commit::empty();
        if self.cursor.index() != before {
            self.push_focus_event(&mut commit);
        }
        self.push_selection_event(&mut commit, selection_changed);
        commit
    }

    fn push_focus_event(&self, commit: &mut Commit<K>) {
        let event = match self
            .cursor
            .index()
            .and_then(|i| self.sequence.id_at(i).map(|id| (i, id)))
        {
            Some((index, id)) => ControllerEvent::FocusChanged {
                id: id.clone(),
                index,
            },
            None => ControllerEvent::FocusCleared,
        };
        commit.events.push(event);
    }

    fn push_selection_event(&self, commit: &mut Commit<K>, changed: bool) {
        if changed && self.reports_selection() {
            commit.events.push(ControllerEvent::SelectionChanged);
        }
    }

    /// Patterns without a selection attribute (menubar, toolbar, feed) keep
    /// the store internally but never expose it.
    fn reports_selection(&self) -> bool {
        self.config.selection_attribute.is_some()
    }
}

fn anchor_update(extend: bool) -> AnchorUpdate {
    if extend {
        AnchorUpdate::Keep
    } else {
        AnchorUpdate::Reset
    }
}

/// Exposes sequence labels to the type-ahead matcher.
struct SequenceLabels<'a, K>(&'a AvailableSequence<K>);

impl<K: Clone + Eq + Hash> LabelSource for SequenceLabels<'_, K> {
    fn label_count(&self) -> usize {
        self.0.len()
    }

    fn label_at(&self, index: usize) -> Option<&str> {
        self.0.label_at(index)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Roving: keyboard navigation, selection, and type-ahead for
//! composite widgets using the roving `tabindex` pattern.
//!
//! ## Overview
//!
//! A composite widget (listbox, menubar, toolbar, feed, carousel, table rows)
//! is a single Tab stop. Inside it, exactly one item is *active*: it carries
//! `tabindex="0"` and receives DOM focus, while every other item carries
//! `tabindex="-1"`. Arrow keys, Home/End, and type-ahead move the active item;
//! Space, Shift, and Ctrl/Cmd+A drive selection.
//!
//! [`RovingController`] owns that state for one widget instance. It is built
//! from three lower layers:
//!
//! - `understory_collection`: the navigable item sequence (disabled items
//!   skipped) and the focus cursor with its selection anchor.
//! - `understory_selection`: single- and multi-select stores.
//! - `understory_typeahead`: the prefix matcher and its inactivity window.
//!
//! ## Workflow
//!
//! 1) Build a [`RovingConfig`], usually from a preset such as
//!    [`RovingConfig::listbox`] or [`RovingConfig::menubar`].
//! 2) Create the controller from the host's items.
//! 3) Translate native key and pointer events into [`KeyEvent`] and
//!    [`RovingController::click`] calls. An [`Outcome::Handled`] result means
//!    the host must prevent the browser default; [`Outcome::Ignored`] events
//!    pass through so Tab and Enter keep their native behavior.
//! 4) Apply the [`Commit`]: move DOM focus on
//!    [`ControllerEvent::FocusChanged`] (or drop it on
//!    [`ControllerEvent::FocusCleared`]), notify listeners on
//!    [`ControllerEvent::SelectionChanged`], and re-render attributes from
//!    [`RovingController::item_states`].
//!
//! Keyboard classification is exposed separately in [`dispatch`] for hosts
//! that want to inspect or remap actions before applying them.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_roving::{Key, KeyEvent, NavigableItem, RovingConfig, RovingController, TabIndex};
//!
//! let items = ["Red", "Green", "Blue"].map(|label| NavigableItem::new(label, label));
//! let mut listbox = RovingController::new(RovingConfig::listbox(), items);
//!
//! let outcome = listbox.handle_key(&KeyEvent::plain(Key::End, 0));
//! assert!(outcome.is_handled());
//! assert_eq!(listbox.active_index(), Some(2));
//! assert_eq!(listbox.selected_ids().collect::<Vec<_>>(), [&"Blue"]);
//!
//! // Exactly one item is in the tab sequence.
//! let tab_stops = listbox
//!     .item_states()
//!     .filter(|state| state.tab_index == TabIndex::Active)
//!     .count();
//! assert_eq!(tab_stops, 1);
//!
//! // Tab is never intercepted.
//! assert!(!listbox.handle_key(&KeyEvent::plain(Key::Tab, 0)).is_handled());
//! ```
//!
//! ## Time
//!
//! The controller never reads a clock. Key events carry a millisecond
//! timestamp which drives the type-ahead window; see
//! [`RovingController::pending_typeahead_clear`] for hosts that want to clear
//! the buffer eagerly from a timer.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod aria;
mod config;
mod controller;
pub mod dispatch;
mod key;

pub use aria::{ContainerState, ItemState, TabIndex};
pub use config::{Orientation, RovingConfig, SelectionAttribute};
pub use controller::{Commit, ControllerEvent, Outcome, RovingController};
pub use key::{Key, KeyEvent, Modifiers};

pub use understory_collection::{AvailableSequence, Boundary, NavigableItem};
pub use understory_selection::{Selection, SelectionMode};
pub use understory_typeahead::PendingClear;

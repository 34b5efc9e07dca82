// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by the controller.

/// A key relevant to composite-widget navigation.
///
/// Hosts translate their native key events into this type; DOM hosts can use
/// [`Key::from_dom_key`] with `KeyboardEvent.key`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// A printable character.
    Character(char),
    /// Anything else (function keys, media keys, …).
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    ///
    /// Legacy names (`"Up"`, `"Spacebar"`, `"Esc"`) are accepted. Any other
    /// single-character value becomes [`Key::Character`].
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::Character(ch),
                    _ => Self::Other,
                }
            }
        }
    }

    /// Collapse aliases (a literal `' '` character is the space bar).
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::Character(' ') => Self::Space,
            other => other,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if the platform "primary" modifier is held.
    ///
    /// Ctrl and Cmd are treated alike so Ctrl+A and Cmd+A both select all.
    #[must_use]
    pub const fn primary(self) -> bool {
        self.intersects(Self::CTRL.union(Self::META))
    }

    /// Returns `true` if Shift is held.
    #[must_use]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if Alt / Option is held.
    #[must_use]
    pub const fn alt(self) -> bool {
        self.contains(Self::ALT)
    }
}

/// A key press with its modifiers and timestamp.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key pressed.
    pub key: Key,
    /// Modifiers held.
    pub modifiers: Modifiers,
    /// Event timestamp in milliseconds; drives the type-ahead window.
    pub timestamp: u64,
}

impl KeyEvent {
    /// A key press with modifiers.
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers, timestamp: u64) -> Self {
        Self {
            key,
            modifiers,
            timestamp,
        }
    }

    /// A key press without modifiers.
    #[must_use]
    pub const fn plain(key: Key, timestamp: u64) -> Self {
        Self::new(key, Modifiers::empty(), timestamp)
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard dispatch: classify a key event into a controller action.
//!
//! Classification is stateless. It only looks at the event and the
//! [`RovingConfig`]; the controller then applies the resulting [`Action`]
//! against its current state.
//!
//! ## Bindings
//!
//! | Key | Single-select | Multi-select |
//! |---|---|---|
//! | Next / Previous arrow | move ±1, select | move ±1 |
//! | Shift + arrow | move ±1, select | move ±1, extend range from anchor |
//! | Home / End | first / last, select | first / last |
//! | Shift (+ Ctrl) + Home / End | first / last, select | first / last, extend range |
//! | Page Up / Page Down | ±`page_step` when configured | same, Shift extends |
//! | Space | consumed, no change | toggle active item |
//! | Shift + Space | consumed, no change | extend range to active item |
//! | Ctrl/Cmd + A | not handled | select all |
//! | printable character | type-ahead | type-ahead |
//! | Enter, Tab, Escape, Alt + anything | not handled | not handled |
//!
//! "Next" and "Previous" depend on [`Orientation`]: Down/Up when vertical,
//! Right/Left when horizontal. The other arrow pair is not handled so it can
//! reach an enclosing widget (for example a menubar's submenu).
//!
//! ```
//! use understory_roving::dispatch::{Action, classify};
//! use understory_roving::{Key, KeyEvent, Modifiers, Orientation, RovingConfig};
//!
//! let config = RovingConfig::listbox().with_orientation(Orientation::Horizontal);
//! let right = KeyEvent::plain(Key::ArrowRight, 0);
//! let down = KeyEvent::plain(Key::ArrowDown, 0);
//!
//! assert_eq!(classify(&right, &config), Some(Action::Move { delta: 1, extend: false }));
//! assert_eq!(classify(&down, &config), None);
//! ```

use understory_selection::SelectionMode;

use crate::config::{Orientation, RovingConfig};
use crate::key::{Key, KeyEvent};

/// What the controller should do in response to a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Move the active item by `delta` positions.
    Move {
        /// Signed step; negative is towards the start.
        delta: isize,
        /// Extend the selection from the anchor (multi-select + Shift).
        extend: bool,
    },
    /// Move to the first item.
    Start {
        /// Extend the selection from the anchor.
        extend: bool,
    },
    /// Move to the last item.
    End {
        /// Extend the selection from the anchor.
        extend: bool,
    },
    /// Toggle the active item's selection (multi-select only).
    Toggle,
    /// Select from the anchor to the active item (multi-select only).
    ExtendToActive,
    /// Select every item (multi-select only).
    SelectAll,
    /// Feed a character to type-ahead.
    Typeahead(char),
    /// Handled without changing state; the host should still prevent the
    /// default action (for example Space scrolling the page).
    Consume,
}

/// Classify `event` under `config`.
///
/// Returns `None` for keys the widget does not handle; the host must let
/// those through untouched so Tab traversal and form submission keep working.
pub fn classify(event: &KeyEvent, config: &RovingConfig) -> Option<Action> {
    let mods = event.modifiers;
    if mods.alt() {
        return None;
    }
    let multi = config.mode == SelectionMode::Multi;
    let extend = multi && mods.shift();

    match event.key.normalized() {
        key @ (Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight) => {
            let delta = arrow_delta(key, config.orientation)?;
            Some(Action::Move { delta, extend })
        }
        Key::Home => Some(Action::Start { extend }),
        Key::End => Some(Action::End { extend }),
        Key::PageUp => page_delta(config).map(|step| Action::Move {
            delta: -step,
            extend,
        }),
        Key::PageDown => page_delta(config).map(|delta| Action::Move { delta, extend }),
        Key::Space => Some(match (multi, mods.shift()) {
            (true, true) => Action::ExtendToActive,
            (true, false) => Action::Toggle,
            (false, _) => Action::Consume,
        }),
        Key::Character(ch) if mods.primary() => {
            (multi && ch.eq_ignore_ascii_case(&'a')).then_some(Action::SelectAll)
        }
        Key::Character(ch) => {
            let printable = !ch.is_control() && !ch.is_whitespace();
            (printable && config.typeahead.is_some()).then_some(Action::Typeahead(ch))
        }
        Key::Enter | Key::Tab | Key::Escape | Key::Other => None,
    }
}

fn arrow_delta(key: Key, orientation: Orientation) -> Option<isize> {
    match (orientation, key) {
        (Orientation::Vertical, Key::ArrowDown) | (Orientation::Horizontal, Key::ArrowRight) => {
            Some(1)
        }
        (Orientation::Vertical, Key::ArrowUp) | (Orientation::Horizontal, Key::ArrowLeft) => {
            Some(-1)
        }
        _ => None,
    }
}

fn page_delta(config: &RovingConfig) -> Option<isize> {
    config
        .page_step
        .filter(|&step| step > 0)
        .and_then(|step| isize::try_from(step).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Modifiers;

    fn key(key: Key) -> KeyEvent {
        KeyEvent::plain(key, 0)
    }

    fn with(key: Key, modifiers: Modifiers) -> KeyEvent {
        KeyEvent::new(key, modifiers, 0)
    }

    #[test]
    fn vertical_ignores_horizontal_arrows() {
        let config = RovingConfig::listbox();
        assert_eq!(
            classify(&key(Key::ArrowDown), &config),
            Some(Action::Move {
                delta: 1,
                extend: false
            })
        );
        assert_eq!(
            classify(&key(Key::ArrowUp), &config),
            Some(Action::Move {
                delta: -1,
                extend: false
            })
        );
        assert_eq!(classify(&key(Key::ArrowLeft), &config), None);
        assert_eq!(classify(&key(Key::ArrowRight), &config), None);
    }

    #[test]
    fn horizontal_ignores_vertical_arrows() {
        let config = RovingConfig::menubar();
        assert_eq!(classify(&key(Key::ArrowUp), &config), None);
        assert_eq!(classify(&key(Key::ArrowDown), &config), None);
        assert_eq!(
            classify(&key(Key::ArrowLeft), &config),
            Some(Action::Move {
                delta: -1,
                extend: false
            })
        );
    }

    #[test]
    fn shift_extends_only_in_multi_mode() {
        let single = RovingConfig::listbox();
        let multi = RovingConfig::listbox_multi();
        let shift_down = with(Key::ArrowDown, Modifiers::SHIFT);
        assert_eq!(
            classify(&shift_down, &single),
            Some(Action::Move {
                delta: 1,
                extend: false
            })
        );
        assert_eq!(
            classify(&shift_down, &multi),
            Some(Action::Move {
                delta: 1,
                extend: true
            })
        );
        let ctrl_shift_end = with(Key::End, Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(
            classify(&ctrl_shift_end, &multi),
            Some(Action::End { extend: true })
        );
    }

    #[test]
    fn space_depends_on_mode() {
        assert_eq!(
            classify(&key(Key::Space), &RovingConfig::listbox()),
            Some(Action::Consume)
        );
        assert_eq!(
            classify(&key(Key::Space), &RovingConfig::listbox_multi()),
            Some(Action::Toggle)
        );
        assert_eq!(
            classify(
                &with(Key::Space, Modifiers::SHIFT),
                &RovingConfig::listbox_multi()
            ),
            Some(Action::ExtendToActive)
        );
        assert_eq!(
            classify(&key(Key::Character(' ')), &RovingConfig::listbox_multi()),
            Some(Action::Toggle)
        );
    }

    #[test]
    fn select_all_needs_multi_and_primary() {
        let ctrl_a = with(Key::Character('a'), Modifiers::CTRL);
        let cmd_shift_a = with(Key::Character('A'), Modifiers::META | Modifiers::SHIFT);
        assert_eq!(
            classify(&ctrl_a, &RovingConfig::listbox_multi()),
            Some(Action::SelectAll)
        );
        assert_eq!(
            classify(&cmd_shift_a, &RovingConfig::listbox_multi()),
            Some(Action::SelectAll)
        );
        assert_eq!(classify(&ctrl_a, &RovingConfig::listbox()), None);
        // Other shortcuts pass through untouched.
        assert_eq!(
            classify(
                &with(Key::Character('c'), Modifiers::CTRL),
                &RovingConfig::listbox_multi()
            ),
            None
        );
    }

    #[test]
    fn printable_characters_feed_typeahead_when_enabled() {
        assert_eq!(
            classify(&key(Key::Character('g')), &RovingConfig::listbox()),
            Some(Action::Typeahead('g'))
        );
        assert_eq!(
            classify(
                &with(Key::Character('G'), Modifiers::SHIFT),
                &RovingConfig::listbox()
            ),
            Some(Action::Typeahead('G'))
        );
        assert_eq!(classify(&key(Key::Character('g')), &RovingConfig::toolbar()), None);
        assert_eq!(
            classify(&key(Key::Character('\u{7}')), &RovingConfig::listbox()),
            None
        );
    }

    #[test]
    fn pages_only_when_configured() {
        assert_eq!(classify(&key(Key::PageDown), &RovingConfig::listbox()), None);
        assert_eq!(
            classify(&key(Key::PageUp), &RovingConfig::table_rows()),
            Some(Action::Move {
                delta: -10,
                extend: false
            })
        );
        assert_eq!(
            classify(&key(Key::PageDown), &RovingConfig::feed()),
            Some(Action::Move {
                delta: 1,
                extend: false
            })
        );
        let zero = RovingConfig::listbox().with_page_step(Some(0));
        assert_eq!(classify(&key(Key::PageDown), &zero), None);
    }

    #[test]
    fn native_keys_pass_through() {
        let config = RovingConfig::listbox_multi();
        for k in [Key::Enter, Key::Tab, Key::Escape, Key::Other] {
            assert_eq!(classify(&key(k), &config), None, "{k:?} must not be intercepted");
        }
        assert_eq!(classify(&with(Key::ArrowDown, Modifiers::ALT), &config), None);
    }
}

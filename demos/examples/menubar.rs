// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menubar and toolbar presets: horizontal, wrapping navigation.
//!
//! The menubar keeps type-ahead; the toolbar lets printable keys through to
//! the focused control. Up/Down are left for the host to open submenus.
//! Pointer clicks go through `RovingController::click`, and a host timer
//! clears the type-ahead buffer from `pending_typeahead_clear`.
//!
//! Run:
//! - `RUST_LOG=understory_roving=debug cargo run -p understory_demos --example menubar`

use tracing_subscriber::EnvFilter;
use understory_roving::{Key, KeyEvent, Modifiers, NavigableItem, RovingConfig, RovingController};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let entries = ["File", "Edit", "View", "Window", "Help"];
    let menu_items = || entries.iter().map(|&label| NavigableItem::new(label, label));

    let mut menubar = RovingController::new(RovingConfig::menubar(), menu_items());
    let mut toolbar = RovingController::new(RovingConfig::toolbar(), menu_items());

    for (name, controller) in [("menubar", &mut menubar), ("toolbar", &mut toolbar)] {
        println!("== {name}");
        for (key, at) in [
            (Key::ArrowLeft, 0),
            (Key::ArrowDown, 50),
            (Key::Character('w'), 100),
            (Key::ArrowRight, 200),
        ] {
            let handled = controller.handle_key(&KeyEvent::plain(key, at)).is_handled();
            println!(
                "{key:?}: handled={handled} active={:?}",
                controller.active_id()
            );
        }
    }

    // A timer the host armed for the last keystroke.
    menubar.handle_key(&KeyEvent::plain(Key::Character('h'), 1_000));
    if let Some(pending) = menubar.pending_typeahead_clear() {
        println!(
            "typeahead buffer {:?} clears at {} ms",
            menubar.typeahead_buffer(),
            pending.deadline
        );
        menubar.fire_typeahead_clear(pending);
    }

    let outcome = menubar.click(&"Edit", Modifiers::empty());
    tracing::info!(handled = outcome.is_handled(), active = ?menubar.active_id(), "clicked Edit");
}

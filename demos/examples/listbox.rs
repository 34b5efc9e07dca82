// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-select listbox driven by a scripted key sequence.
//!
//! This example shows how a host view:
//! - translates DOM `KeyboardEvent.key` values with `Key::from_dom_key`,
//! - prevents the browser default only for handled keys,
//! - applies `Commit` events (focus moves, selection callbacks),
//! - re-renders `tabindex` and `aria-selected` from `item_states`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example listbox`

use tracing_subscriber::EnvFilter;
use understory_roving::{
    ControllerEvent, Key, KeyEvent, Modifiers, NavigableItem, RovingConfig, RovingController,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let fruits = [
        ("apple", "Apple", false),
        ("apricot", "Apricot", false),
        ("banana", "Banana", true),
        ("blueberry", "Blueberry", false),
        ("cherry", "Cherry", false),
    ];
    let items = fruits
        .iter()
        .map(|&(id, label, disabled)| NavigableItem::new(id, label).disabled(disabled));
    let config = RovingConfig::listbox_multi();
    let mut listbox = RovingController::new(config, items);

    // (DOM key, modifiers, timestamp in ms)
    let script = [
        ("ArrowDown", Modifiers::empty(), 0),
        (" ", Modifiers::empty(), 100),
        ("ArrowDown", Modifiers::SHIFT, 200),
        ("End", Modifiers::SHIFT, 300),
        ("c", Modifiers::empty(), 1_000),
        ("Tab", Modifiers::empty(), 1_100),
        ("a", Modifiers::CTRL, 1_200),
    ];

    for (dom_key, modifiers, timestamp) in script {
        let event = KeyEvent::new(Key::from_dom_key(dom_key), modifiers, timestamp);
        let outcome = listbox.handle_key(&event);
        let Some(commit) = outcome.commit() else {
            println!("{dom_key:>10?} -> not handled, default action runs");
            continue;
        };
        println!("{dom_key:>10?} -> handled, preventDefault()");
        for event in commit.events() {
            match event {
                ControllerEvent::FocusChanged { id, index } => {
                    println!("             onFocusChange({id:?}, {index})");
                }
                ControllerEvent::FocusCleared => {
                    println!("             nothing left to focus");
                }
                ControllerEvent::SelectionChanged => {
                    let ids: Vec<_> = listbox.selected_ids().collect();
                    println!("             onSelectionChange({ids:?})");
                }
            }
        }
    }

    println!();
    let container = listbox.container_state();
    println!("<ul role=\"listbox\" {}>", render(&container.attributes()));
    for state in listbox.item_states() {
        let attrs = state.attributes(config.selection_attribute);
        println!("  <li id={:?} {}>", state.id, render(&attrs));
    }
    println!("</ul>");
}

fn render(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!("{name}=\"{value}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

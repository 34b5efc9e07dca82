// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration and per-pattern presets.

use understory_collection::Boundary;
use understory_selection::SelectionMode;
use understory_typeahead::DEFAULT_TIMEOUT_MS;

/// Which arrow keys navigate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Up/Down navigate; Left/Right pass through.
    #[default]
    Vertical,
    /// Left/Right navigate; Up/Down pass through.
    Horizontal,
}

impl Orientation {
    /// Value for the container's `aria-orientation` attribute.
    #[must_use]
    pub const fn aria_value(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// The ARIA state a pattern uses to expose selection on its items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionAttribute {
    /// `aria-selected` (listbox options, tabs, grid rows).
    #[default]
    AriaSelected,
    /// `aria-checked` (checkbox-style multi-select lists, radio groups).
    AriaChecked,
    /// `aria-expanded` (disclosure-style items).
    AriaExpanded,
}

impl SelectionAttribute {
    /// Attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AriaSelected => "aria-selected",
            Self::AriaChecked => "aria-checked",
            Self::AriaExpanded => "aria-expanded",
        }
    }
}

/// Configuration for a [`RovingController`](crate::RovingController).
///
/// Start from [`RovingConfig::default`] (a single-select vertical listbox) or
/// one of the pattern presets, then adjust with the `with_*` methods.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RovingConfig {
    /// Single- or multi-select.
    pub mode: SelectionMode,
    /// Which arrow keys navigate.
    pub orientation: Orientation,
    /// What happens past the first/last item.
    pub boundary: Boundary,
    /// Type-ahead inactivity window in milliseconds, or `None` to disable
    /// type-ahead (printable keys then pass through).
    pub typeahead: Option<u64>,
    /// How far Page Up / Page Down move, or `None` to leave them unhandled.
    pub page_step: Option<usize>,
    /// How items expose selection, or `None` for patterns without selection
    /// (menubar, toolbar, feed).
    pub selection_attribute: Option<SelectionAttribute>,
}

impl Default for RovingConfig {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Single,
            orientation: Orientation::Vertical,
            boundary: Boundary::Clamp,
            typeahead: Some(DEFAULT_TIMEOUT_MS),
            page_step: None,
            selection_attribute: Some(SelectionAttribute::AriaSelected),
        }
    }
}

impl RovingConfig {
    /// Single-select listbox: vertical, clamped, selection follows focus.
    #[must_use]
    pub fn listbox() -> Self {
        Self::default()
    }

    /// Multi-select listbox (`aria-multiselectable="true"`).
    #[must_use]
    pub fn listbox_multi() -> Self {
        Self::default().with_mode(SelectionMode::Multi)
    }

    /// Menubar: horizontal, wrapping, type-ahead over menu item labels.
    #[must_use]
    pub fn menubar() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            boundary: Boundary::Wrap,
            selection_attribute: None,
            ..Self::default()
        }
    }

    /// Toolbar: horizontal, wrapping, no type-ahead.
    #[must_use]
    pub fn toolbar() -> Self {
        Self {
            typeahead: None,
            ..Self::menubar()
        }
    }

    /// Carousel slide picker: horizontal, wrapping, the active slide is selected.
    #[must_use]
    pub fn carousel() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            boundary: Boundary::Wrap,
            typeahead: None,
            ..Self::default()
        }
    }

    /// Feed: vertical, clamped, Page Up / Page Down step one article.
    #[must_use]
    pub fn feed() -> Self {
        Self {
            typeahead: None,
            page_step: Some(1),
            selection_attribute: None,
            ..Self::default()
        }
    }

    /// Table row navigation: vertical, clamped, paged by ten rows.
    #[must_use]
    pub fn table_rows() -> Self {
        Self {
            typeahead: None,
            page_step: Some(10),
            ..Self::default()
        }
    }

    /// Sortable table header cells: horizontal, clamped, no selection.
    #[must_use]
    pub fn table_headers() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            typeahead: None,
            selection_attribute: None,
            ..Self::default()
        }
    }

    /// Set the selection mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the boundary policy.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the type-ahead window in milliseconds (`None` disables type-ahead).
    #[must_use]
    pub fn with_typeahead(mut self, timeout: Option<u64>) -> Self {
        self.typeahead = timeout;
        self
    }

    /// Set the Page Up / Page Down step (`None` leaves them unhandled).
    #[must_use]
    pub fn with_page_step(mut self, step: Option<usize>) -> Self {
        self.page_step = step;
        self
    }

    /// Set the selection attribute.
    #[must_use]
    pub fn with_selection_attribute(mut self, attribute: Option<SelectionAttribute>) -> Self {
        self.selection_attribute = attribute;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_pick_boundary_per_pattern() {
        assert_eq!(RovingConfig::listbox().boundary, Boundary::Clamp);
        assert_eq!(RovingConfig::table_rows().boundary, Boundary::Clamp);
        assert_eq!(RovingConfig::feed().boundary, Boundary::Clamp);
        assert_eq!(RovingConfig::menubar().boundary, Boundary::Wrap);
        assert_eq!(RovingConfig::toolbar().boundary, Boundary::Wrap);
        assert_eq!(RovingConfig::carousel().boundary, Boundary::Wrap);
    }

    #[test]
    fn default_is_single_select_vertical_listbox() {
        let config = RovingConfig::default();
        assert_eq!(config.mode, SelectionMode::Single);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.typeahead, Some(500));
        assert_eq!(config.orientation.aria_value(), "vertical");
    }

    #[test]
    fn toolbar_inherits_menubar_layout_without_typeahead() {
        let toolbar = RovingConfig::toolbar();
        assert_eq!(toolbar.orientation, Orientation::Horizontal);
        assert_eq!(toolbar.typeahead, None);
        assert_eq!(toolbar.selection_attribute, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = RovingConfig::listbox_multi()
            .with_orientation(Orientation::Horizontal)
            .with_page_step(Some(5))
            .with_selection_attribute(Some(SelectionAttribute::AriaChecked));
        assert_eq!(config.mode, SelectionMode::Multi);
        assert_eq!(config.page_step, Some(5));
        assert_eq!(
            config.selection_attribute.map(SelectionAttribute::name),
            Some("aria-checked")
        );
    }
}

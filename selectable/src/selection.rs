//! Caller-owned selection values.
//!
//! A [`Selection`] is never mutated by the widget. The transition helpers
//! here return the next value instead, which the widget hands to its owner.

use std::fmt;

use crate::option::SelectOption;

/// Whether a dropdown picks one option or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multiple,
}

impl SelectionMode {
    /// The empty selection for this mode.
    pub fn empty(self) -> Selection {
        match self {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }
}

/// The current value of a dropdown.
///
/// The variant doubles as the mode flag, so a single-mode widget can never be
/// handed a list and vice versa. `Multiple` keeps insertion order and holds no
/// two options with the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

impl Selection {
    pub fn single(option: Option<SelectOption>) -> Self {
        Selection::Single(option)
    }

    /// Build a multiple selection, keeping the first occurrence of each value.
    pub fn multiple(options: impl IntoIterator<Item = SelectOption>) -> Self {
        let mut list: Vec<SelectOption> = Vec::new();
        for option in options {
            if !list.contains(&option) {
                list.push(option);
            }
        }
        Selection::Multiple(list)
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Selected options in display order.
    pub fn options(&self) -> &[SelectOption] {
        match self {
            Selection::Single(option) => option.as_slice(),
            Selection::Multiple(list) => list,
        }
    }

    pub fn len(&self) -> usize {
        self.options().len()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }

    /// Whether `option` is selected, compared by value.
    pub fn contains(&self, option: &SelectOption) -> bool {
        self.options().contains(option)
    }

    /// The selection after the user picks `option`.
    ///
    /// Single mode returns `None` when `option` is already the selection, so no
    /// change is reported. Multiple mode removes a selected option and appends
    /// an unselected one.
    pub fn toggled(&self, option: &SelectOption) -> Option<Selection> {
        match self {
            Selection::Single(current) => {
                if current.as_ref() == Some(option) {
                    None
                } else {
                    Some(Selection::Single(Some(option.clone())))
                }
            }
            Selection::Multiple(list) => {
                if list.contains(option) {
                    Some(Selection::Multiple(
                        list.iter().filter(|item| *item != option).cloned().collect(),
                    ))
                } else {
                    let mut next = list.clone();
                    next.push(option.clone());
                    Some(Selection::Multiple(next))
                }
            }
        }
    }

    /// The empty selection of the same mode.
    pub fn cleared(&self) -> Selection {
        self.mode().empty()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let labels: Vec<&str> = self.options().iter().map(|o| o.label()).collect();
        write!(f, "{}", labels.join(", "))
    }
}

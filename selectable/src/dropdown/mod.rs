//! Dropdown widget - a controlled single or multiple select.

pub mod events;
pub mod render;
mod state;

pub use state::DropdownState;

use crate::event::EventContext;
use crate::option::SelectOption;
use crate::selection::Selection;
use crate::subscription::{KeyRouter, Subscription};

/// Default number of option rows shown before the list scrolls.
pub const DEFAULT_MAX_VISIBLE: usize = 6;

/// A dropdown over a fixed list of options.
///
/// `Dropdown` owns only its interaction state (open/closed, highlighted row,
/// list scroll). The selection belongs to the caller: every method that can
/// change it takes the current [`Selection`] and pushes the requested new
/// value into an [`EventContext`].
///
/// # Example
///
/// ```
/// use selectable::{Dropdown, EventContext, KeyRouter, Key, Modifiers, SelectOption, Selection};
///
/// let router = KeyRouter::new();
/// let mut tags = Dropdown::new("tags", vec![
///     SelectOption::new("First", 1),
///     SelectOption::new("Second", 2),
/// ]);
/// tags.mount(&router);
///
/// let selection = Selection::Multiple(Vec::new());
/// let mut cx = EventContext::new();
/// tags.on_key(Key::Enter, Modifiers::new(), &selection, &mut cx);
/// tags.on_key(Key::Enter, Modifiers::new(), &selection, &mut cx);
///
/// let change = &cx.changes()[0];
/// assert_eq!(change.selection, Selection::multiple([SelectOption::new("First", 1)]));
/// ```
#[derive(Debug)]
pub struct Dropdown {
    id: String,
    options: Vec<SelectOption>,
    state: DropdownState,
    /// First option row shown in the open list.
    scroll_offset: usize,
    max_visible: usize,
    placeholder: String,
    subscription: Option<Subscription>,
}

impl Dropdown {
    pub fn new(id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            id: id.into(),
            options,
            state: DropdownState::Closed,
            scroll_offset: 0,
            max_visible: DEFAULT_MAX_VISIBLE,
            placeholder: String::new(),
            subscription: None,
        }
    }

    /// Text shown while a single-mode dropdown has no value.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Rows shown before the option list scrolls. At least one.
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Replace the option list, keeping the highlight in range.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if let Some(highlighted) = self.state.highlighted()
            && highlighted >= self.options.len()
        {
            self.state = DropdownState::Open {
                highlighted: self.options.len().saturating_sub(1),
            };
        }
        self.sync_scroll();
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    // -------------------------------------------------------------------------
    // Key subscription
    // -------------------------------------------------------------------------

    /// Subscribe to key delivery on `router`.
    ///
    /// Any previous subscription is released before the new one is taken.
    pub fn mount(&mut self, router: &KeyRouter) {
        self.unmount();
        self.subscription = Some(router.subscribe(&self.id));
    }

    /// Release the key subscription, if any.
    pub fn unmount(&mut self) {
        self.subscription.take();
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Open the list with the first option highlighted.
    pub fn open(&mut self) -> bool {
        let opened = self.state.open();
        if opened {
            self.scroll_offset = 0;
            log::debug!("Dropdown::open id={}", self.id);
        }
        opened
    }

    pub fn close(&mut self) -> bool {
        let closed = self.state.close();
        if closed {
            log::debug!("Dropdown::close id={}", self.id);
        }
        closed
    }

    pub fn toggle(&mut self) {
        if !self.close() {
            self.open();
        }
    }

    /// Move the highlight up (-1) or down (+1). Out-of-range moves are dropped.
    pub fn move_highlight(&mut self, delta: isize) -> bool {
        let moved = self.state.move_by(delta, self.options.len());
        if moved {
            self.sync_scroll();
        }
        moved
    }

    /// Highlight the option at `index` while open.
    pub fn highlight(&mut self, index: usize) -> bool {
        let moved = self.state.highlight(index, self.options.len());
        if moved {
            self.sync_scroll();
        }
        moved
    }

    /// Keep the highlighted row inside the visible window.
    fn sync_scroll(&mut self) {
        let Some(highlighted) = self.state.highlighted() else {
            return;
        };
        if highlighted < self.scroll_offset {
            self.scroll_offset = highlighted;
        } else if highlighted >= self.scroll_offset + self.max_visible {
            self.scroll_offset = highlighted + 1 - self.max_visible;
        }
        let max_offset = self.options.len().saturating_sub(self.max_visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    // -------------------------------------------------------------------------
    // Selection requests
    // -------------------------------------------------------------------------

    /// Request the selection that results from picking `option`.
    ///
    /// Returns true if a change was pushed. Picking the current value of a
    /// single-mode dropdown pushes nothing.
    pub fn select_option(
        &self,
        option: &SelectOption,
        selection: &Selection,
        cx: &mut EventContext,
    ) -> bool {
        match selection.toggled(option) {
            Some(next) => {
                log::debug!(
                    "Dropdown::select_option id={} option={} -> {}",
                    self.id,
                    option.value,
                    next
                );
                cx.push_change(&self.id, next);
                true
            }
            None => false,
        }
    }

    /// Request the empty selection, whatever the current one is.
    pub fn clear(&self, selection: &Selection, cx: &mut EventContext) {
        log::debug!("Dropdown::clear id={}", self.id);
        cx.push_change(&self.id, selection.cleared());
    }
}

//! Event handling for the Dropdown widget.

use crate::event::{EventContext, EventResult, Key, Modifiers};
use crate::hit::HitTarget;
use crate::selection::Selection;

use super::Dropdown;

impl Dropdown {
    /// Handle a key press while this dropdown is focused.
    ///
    /// Keys are ignored unless the dropdown holds a key subscription.
    pub fn on_key(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        selection: &Selection,
        cx: &mut EventContext,
    ) -> EventResult {
        if !self.is_mounted() {
            log::debug!("Dropdown::on_key id={} not mounted, ignoring", self.id);
            return EventResult::Ignored;
        }

        if modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Enter | Key::Char(' ') => {
                if let Some(index) = self.highlighted() {
                    if let Some(option) = self.options.get(index) {
                        self.select_option(option, selection, cx);
                    }
                    self.close();
                } else {
                    self.open();
                }
                EventResult::Consumed
            }
            Key::Up | Key::Down => {
                if !self.is_open() {
                    self.open();
                } else {
                    let delta = if key == Key::Down { 1 } else { -1 };
                    self.move_highlight(delta);
                }
                EventResult::Consumed
            }
            Key::Home if self.is_open() => {
                self.highlight(0);
                EventResult::Consumed
            }
            Key::End if self.is_open() => {
                self.highlight(self.options.len().saturating_sub(1));
                EventResult::Consumed
            }
            Key::Escape => {
                if self.close() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on one of this dropdown's hit regions.
    pub fn on_click(
        &mut self,
        target: HitTarget,
        selection: &Selection,
        cx: &mut EventContext,
    ) -> EventResult {
        match target {
            HitTarget::Body => {
                self.toggle();
                EventResult::Consumed
            }
            // Clear and chip removal never reach the body toggle.
            HitTarget::Clear => {
                self.clear(selection, cx);
                EventResult::Consumed
            }
            HitTarget::Chip(index) => {
                if let Some(option) = selection.options().get(index) {
                    self.select_option(option, selection, cx);
                }
                EventResult::Consumed
            }
            HitTarget::Option(index) => {
                if !self.is_open() {
                    return EventResult::Ignored;
                }
                if let Some(option) = self.options.get(index) {
                    self.select_option(option, selection, cx);
                }
                self.close();
                EventResult::Consumed
            }
        }
    }

    /// Handle the pointer moving over one of this dropdown's hit regions.
    pub fn on_hover(&mut self, target: HitTarget) -> EventResult {
        match target {
            HitTarget::Option(index) if self.is_open() => {
                self.highlight(index);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Focus left the dropdown.
    pub fn on_blur(&mut self) {
        self.close();
    }
}

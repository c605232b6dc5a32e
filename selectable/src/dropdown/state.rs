//! Open/closed interaction state.

/// Ephemeral interaction state of one dropdown.
///
/// While open, `highlighted` indexes into the option list. Every transition
/// into `Open` starts at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open { highlighted: usize },
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        matches!(self, DropdownState::Open { .. })
    }

    /// Highlighted index, `None` while closed.
    pub fn highlighted(&self) -> Option<usize> {
        match self {
            DropdownState::Closed => None,
            DropdownState::Open { highlighted } => Some(*highlighted),
        }
    }

    /// Open with the first option highlighted. Returns true if it was closed.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = DropdownState::Open { highlighted: 0 };
        true
    }

    /// Close. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        *self = DropdownState::Closed;
        true
    }

    pub fn toggle(&mut self) {
        if !self.close() {
            self.open();
        }
    }

    /// Move the highlight by `delta` within `0..len`.
    ///
    /// Moves that would leave the range are dropped rather than clamped, so
    /// the highlight never wraps. Returns true if the highlight moved.
    pub fn move_by(&mut self, delta: isize, len: usize) -> bool {
        let DropdownState::Open { highlighted } = *self else {
            return false;
        };
        let Some(next) = highlighted.checked_add_signed(delta) else {
            return false;
        };
        if next >= len {
            return false;
        }
        *self = DropdownState::Open { highlighted: next };
        true
    }

    /// Highlight `index` if open and in range. Returns true on change.
    pub fn highlight(&mut self, index: usize, len: usize) -> bool {
        match *self {
            DropdownState::Open { highlighted } if index < len && index != highlighted => {
                *self = DropdownState::Open { highlighted: index };
                true
            }
            _ => false,
        }
    }
}

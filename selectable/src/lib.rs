//! A controlled dropdown / multi-select widget for terminal UIs.
//!
//! The widget never owns the selection. Every event method takes the caller's
//! current [`Selection`] and reports requested changes through an
//! [`EventContext`], which the host drains and applies.

pub mod buffer;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod hit;
pub mod option;
pub mod selection;
pub mod subscription;
pub mod text;
pub mod theme;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use dropdown::{Dropdown, DropdownState};
pub use error::OptionsError;
pub use event::{ChangeEvent, EventContext, EventResult, Key, Modifiers};
pub use hit::{HitMap, HitTarget, Region};
pub use option::{OptionValue, SelectOption, validate_options};
pub use selection::{Selection, SelectionMode};
pub use subscription::{KeyRouter, Subscription};
pub use theme::Theme;
pub use types::{Rect, Rgb, TextStyle};

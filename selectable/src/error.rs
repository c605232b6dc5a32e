use thiserror::Error;

use crate::option::OptionValue;

/// Problems with a caller-supplied option list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("duplicate option value: {value}")]
    DuplicateValue { value: OptionValue },
}

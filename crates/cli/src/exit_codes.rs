//! CLI exit code registry
//!
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Meaning                                             |
//! |------|-----------------------------------------------------|
//! | 0    | Success                                             |
//! | 1    | Operational error (storage failure, no stored value)|
//! | 2    | Usage error (bad args, unknown preference key)      |
//! | 3    | Validation error (value rejected, save blocked)     |

use novatheme_store::StoreError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Operational error - storage failure, or `get` found no stored value.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, unknown preference key.
pub const EXIT_USAGE: u8 = 2;

/// Validation error - submitted value rejected by the schema.
/// A `save` submission with any invalid field exits with this code
/// and persists nothing.
pub const EXIT_VALIDATION: u8 = 3;

pub fn store_error_code(err: &StoreError) -> u8 {
    match err {
        StoreError::UnknownKey(_) => EXIT_USAGE,
        StoreError::InvalidValue { .. } => EXIT_VALIDATION,
        StoreError::NotFound { .. } => EXIT_ERROR,
        StoreError::Storage(_) => EXIT_ERROR,
    }
}

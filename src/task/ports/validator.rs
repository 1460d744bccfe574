//! Validator port for task form input.
//!
//! Validation sits in front of the task store. The ordering functions assume
//! well-formed input and never call a validator themselves.

use crate::task::{domain::TaskDraft, error::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for validating task drafts before they reach the store.
///
/// Implementations should collect every failing rule rather than stop at
/// the first, combining them with [`ValidationError::multiple`].
pub trait TaskValidator: Send + Sync {
    /// Validates a draft against all rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any rule fails.
    fn validate(&self, draft: &TaskDraft) -> ValidationResult<()>;
}

/// Limits applied to task drafts.
///
/// Character counts are Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum name length.
    pub name_min_chars: usize,
    /// Maximum name length.
    pub name_max_chars: usize,
    /// Minimum description length.
    pub description_min_chars: usize,
    /// Smallest accepted rank.
    pub min_order: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_chars: 3,
            name_max_chars: 20,
            description_min_chars: 20,
            min_order: 1,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration that only requires non-empty text.
    ///
    /// Useful for imports and tests where short fixtures are convenient.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            name_min_chars: 1,
            name_max_chars: usize::MAX,
            description_min_chars: 1,
            ..Default::default()
        }
    }
}

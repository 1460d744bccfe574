//! Error types for task input validation.
//!
//! Uses `thiserror` for typed variants that form layers can inspect and map
//! to field-level messages.

use thiserror::Error;

/// Errors raised while validating a task draft.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty or whitespace only.
    #[error("name is required")]
    MissingName,

    /// The name is shorter than the configured minimum.
    #[error("name must be at least {min} characters")]
    NameTooShort {
        /// Minimum number of characters.
        min: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The name is longer than the configured maximum.
    #[error("name cannot exceed {max} characters")]
    NameTooLong {
        /// Maximum number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The description is empty or whitespace only.
    #[error("description is required")]
    MissingDescription,

    /// The description is shorter than the configured minimum.
    #[error("description must be at least {min} characters")]
    DescriptionTooShort {
        /// Minimum number of characters.
        min: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The requested rank is below the configured minimum.
    #[error("order must be greater than {}", .min.saturating_sub(1))]
    OrderTooLow {
        /// Smallest accepted rank.
        min: u32,
        /// Rank supplied.
        actual: u32,
    },

    /// Several rules failed.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<ValidationError>),
}

impl ValidationError {
    /// Combines collected errors.
    ///
    /// A single error is returned unchanged; nested `Multiple` values are
    /// flattened.
    #[must_use]
    pub fn multiple(errors: Vec<Self>) -> Self {
        let mut flattened: Vec<Self> = errors
            .into_iter()
            .flat_map(|error| match error {
                Self::Multiple(inner) => inner,
                other => vec![other],
            })
            .collect();
        if flattened.len() == 1
            && let Some(single) = flattened.pop()
        {
            return single;
        }
        Self::Multiple(flattened)
    }

    /// Returns the individual errors, flattening `Multiple`.
    #[must_use]
    pub fn errors(&self) -> Vec<&Self> {
        match self {
            Self::Multiple(inner) => inner.iter().collect(),
            other => vec![other],
        }
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

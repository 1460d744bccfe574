//! Validation service implementation.
//!
//! Provides the default implementation of the [`TaskValidator`] port,
//! combining the individual rules into one validator.

use crate::task::{
    domain::TaskDraft,
    ports::validator::{TaskValidator, ValidationConfig, ValidationResult},
    validation::rules,
};

/// Default implementation of the task validator.
///
/// Applies every rule, collecting errors so a form can report all failing
/// fields at once.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::TaskDraft;
/// use taskboard::task::ports::TaskValidator;
/// use taskboard::task::validation::DefaultTaskValidator;
///
/// let validator = DefaultTaskValidator::new();
/// let draft = TaskDraft::new("Groceries", "Milk, eggs, flour and two lemons");
/// assert!(validator.validate(&draft).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: ValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, draft: &TaskDraft) -> ValidationResult<()> {
        let errors: Vec<_> = [
            rules::validate_name(&draft.name, &self.config),
            rules::validate_description(&draft.description, &self.config),
            rules::validate_order(draft.order, &self.config),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::task::error::ValidationError::multiple(errors))
        }
    }
}

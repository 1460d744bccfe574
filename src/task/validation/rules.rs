//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one draft field. Rules return `Ok(())`
//! on success or the specific [`ValidationError`] on failure.

use crate::task::{error::ValidationError, ports::validator::ValidationConfig};

/// Validates the task name length.
///
/// # Errors
///
/// Returns [`ValidationError::MissingName`] for blank names, otherwise
/// [`ValidationError::NameTooShort`] or [`ValidationError::NameTooLong`]
/// when the length is outside the configured range.
pub fn validate_name(name: &str, config: &ValidationConfig) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    let actual = name.chars().count();
    if actual < config.name_min_chars {
        return Err(ValidationError::NameTooShort {
            min: config.name_min_chars,
            actual,
        });
    }
    if actual > config.name_max_chars {
        return Err(ValidationError::NameTooLong {
            max: config.name_max_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates the task description length.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDescription`] for blank descriptions or
/// [`ValidationError::DescriptionTooShort`] below the configured minimum.
pub fn validate_description(
    description: &str,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    let actual = description.chars().count();
    if actual < config.description_min_chars {
        return Err(ValidationError::DescriptionTooShort {
            min: config.description_min_chars,
            actual,
        });
    }
    Ok(())
}

/// Validates the requested rank.
///
/// # Errors
///
/// Returns [`ValidationError::OrderTooLow`] below the configured minimum.
pub const fn validate_order(order: u32, config: &ValidationConfig) -> Result<(), ValidationError> {
    if order < config.min_order || order == 0 {
        return Err(ValidationError::OrderTooLow {
            min: config.min_order,
            actual: order,
        });
    }
    Ok(())
}

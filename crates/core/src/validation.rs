//! Command validation helpers.
//!
//! Command DTOs derive [`validator::Validate`]; the custom checks they share
//! live here, together with the conversion from [`ValidationErrors`] into a
//! single readable [`CoreError::Validation`].

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Reject empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("blank", "must not be blank"));
    }
    Ok(())
}

/// Reject NaN and infinities.
pub fn finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(error_with_message("not_finite", "must be a finite number"));
    }
    Ok(())
}

/// Flatten validation errors into one message, sorted by field name so the
/// output is stable: `"email: must be a valid email address; name: must not be blank"`.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Run a command's validators, mapping failures to [`CoreError::Validation`].
pub fn validate_command<T: Validate>(command: &T) -> Result<(), CoreError> {
    command
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

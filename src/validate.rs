//! Form Validation
//!
//! Required-field checks run before any request is sent. Inputs are trimmed.

use crate::error::ValidationError;
use crate::models::Credentials;

fn required(value: &str, error: ValidationError) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(error)
    } else {
        Ok(value.to_string())
    }
}

pub fn task_name(name: &str) -> Result<String, ValidationError> {
    required(name, ValidationError::EmptyTaskName)
}

pub fn edited_task_name(name: &str) -> Result<String, ValidationError> {
    required(name, ValidationError::EmptyEditedTaskName)
}

pub fn category_title(title: &str) -> Result<String, ValidationError> {
    required(title, ValidationError::EmptyCategoryTitle)
}

pub fn credentials(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    Ok(Credentials {
        email: required(email, ValidationError::MissingCredentials)?,
        password: required(password, ValidationError::MissingCredentials)?,
    })
}

/// Empty selection means "no category".
pub fn category_choice(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

use dochub_core::AppError;

/// Trim a user-supplied node name, rejecting blank input.
pub(crate) fn clean_name(kind: &str, name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{kind} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}

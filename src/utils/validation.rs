use crate::utils::error::{ResolverError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ResolverError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Acronyms are 2-5 letters, no digits or whitespace.
pub fn validate_acronym(field_name: &str, acronym: &str) -> Result<()> {
    let letters = acronym.trim().chars().count();
    if !(2..=5).contains(&letters) {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: acronym.to_string(),
            reason: "Acronym must be 2 to 5 letters long".to_string(),
        });
    }

    if !acronym.trim().chars().all(char::is_alphabetic) {
        return Err(ResolverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: acronym.to_string(),
            reason: "Acronym may only contain letters".to_string(),
        });
    }

    Ok(())
}

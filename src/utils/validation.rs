use crate::utils::error::{OrderFlowError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(OrderFlowError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(OrderFlowError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_count(field_name: &str, value: i32) -> Result<()> {
    if value < 0 {
        return Err(OrderFlowError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must not be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderFlowError::ValidationError {
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
    // NaN fails both comparisons, so reject it explicitly via partial_cmp.
    let in_range = value.partial_cmp(&min).is_some_and(|o| o.is_ge())
        && value.partial_cmp(&max).is_some_and(|o| o.is_le());
    if !in_range {
        return Err(OrderFlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, extension: &str) -> Result<()> {
    if extension.trim().is_empty() {
        return Err(OrderFlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension cannot be empty".to_string(),
        });
    }
    if extension.contains(['.', '/', '\\', '\0']) {
        return Err(OrderFlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: extension.to_string(),
            reason: "Extension must be a bare suffix such as 'html'".to_string(),
        });
    }
    Ok(())
}

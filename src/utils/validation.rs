use crate::utils::error::{ApiError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn employee_id_regex() -> &'static Regex {
    static EMPLOYEE_ID: OnceLock<Regex> = OnceLock::new();
    EMPLOYEE_ID
        .get_or_init(|| Regex::new(r"^[0-9]{3}-[0-9]{10}$").expect("employee id pattern compiles"))
}

/// Employee identifiers are three digits, a hyphen, then ten digits.
pub fn is_valid_employee_id(value: &str) -> bool {
    employee_id_regex().is_match(value)
}

pub fn validate_employee_id(field_name: &str, value: &str) -> Result<()> {
    if is_valid_employee_id(value) {
        Ok(())
    } else {
        Err(ApiError::invalid_identifier(field_name, value))
    }
}

/// Accepts ISBN-10 and ISBN-13 with optional hyphens or spaces. Checksums are not verified.
pub fn is_valid_isbn(value: &str) -> bool {
    let compact: Vec<char> = value.chars().filter(|c| *c != '-' && *c != ' ').collect();
    match compact.len() {
        13 => compact.iter().all(|c| c.is_ascii_digit()),
        10 => {
            compact[..9].iter().all(|c| c.is_ascii_digit())
                && (compact[9].is_ascii_digit() || compact[9] == 'X' || compact[9] == 'x')
        }
        _ => false,
    }
}

pub fn validate_isbn(field_name: &str, value: &str) -> Result<()> {
    if is_valid_isbn(value) {
        Ok(())
    } else {
        Err(ApiError::invalid_identifier(field_name, value))
    }
}

/// Required record fields only need to be non-empty.
pub fn validate_required_field(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ApiError::EmptyField {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_table_name(field_name: &str, table: &str) -> Result<()> {
    if table.len() < 3 || table.len() > 255 {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: table.to_string(),
            reason: "Table name must be between 3 and 255 characters".to_string(),
        });
    }

    if !table
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        return Err(ApiError::InvalidConfigValue {
            field: field_name.to_string(),
            value: table.to_string(),
            reason: "Table name can only contain letters, numbers, underscores, hyphens, and dots"
                .to_string(),
        });
    }

    Ok(())
}

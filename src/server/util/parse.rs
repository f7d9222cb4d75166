use std::num::NonZeroU64;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an optional stored Discord id, passing `None` through.
pub fn parse_optional_u64(value: Option<String>) -> Result<Option<u64>, AppError> {
    value.map(parse_u64_from_string).transpose()
}

/// Parses an optional Discord id supplied by an API client.
///
/// # Returns
/// - `Ok(Option<u64>)` - Parsed id, `None` when absent or blank
/// - `Err(AppError::BadRequest)` - Value is not a Discord snowflake; zero is rejected since
///   serenity ids must be non-zero
pub fn parse_discord_id_input(
    field: &str,
    value: Option<String>,
) -> Result<Option<u64>, AppError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<NonZeroU64>()
        .map(|id| Some(id.get()))
        .map_err(|_| {
            AppError::BadRequest(format!("{} must be a Discord id, got '{}'", field, value))
        })
}

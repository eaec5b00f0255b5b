use crate::error::{internal::InternalError, AppError};

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

/// Decodes a JSON text column into the requested type.
///
/// # Arguments
/// - `column` - Column name, reported in the error
/// - `value` - Raw column text
///
/// # Returns
/// - `Ok(T)` - The decoded value
/// - `Err(AppError::InternalErr(MalformedJsonColumn))` - The text is not valid JSON for `T`
pub fn parse_json_column<T: serde::de::DeserializeOwned>(
    column: &'static str,
    value: &str,
) -> Result<T, AppError> {
    let result = serde_json::from_str(value)
        .map_err(|e| InternalError::MalformedJsonColumn { column, source: e })?;

    Ok(result)
}

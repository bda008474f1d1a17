use crate::error::command::CommandError;

/// Parses a points delta from a command argument
///
/// Accepts the usual decimal and float notations with an optional sign
/// (`5`, `-2`, `+1.5`, `.5`, `1e2`). Values that parse but are not finite
/// (`inf`, `NaN`) are rejected since they would poison every later total.
///
/// # Arguments
/// - `value` - The raw argument token
///
/// # Returns
/// - `Ok(f64)` - Successfully parsed finite number
/// - `Err(CommandError::InvalidPoints)` - Token is not a finite number
pub fn parse_points(value: &str) -> Result<f64, CommandError> {
    match value.parse::<f64>() {
        Ok(points) if points.is_finite() => Ok(points),
        _ => Err(CommandError::InvalidPoints {
            value: value.to_string(),
        }),
    }
}

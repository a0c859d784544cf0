//! Palette scale entries to custom properties.

use crate::error::ThemeError;
use crate::tokens::{VariableMap, custom_property};

/// Extract the step number from a scale entry key.
///
/// Returns the first contiguous run of one to three decimal digits found in the
/// key, scanning left to right: `"olive7"` gives `"7"`, `"oliveA11"` gives
/// `"11"`. When a key carries more than one digit run the first one wins.
pub fn parse_step(key: &str) -> Result<&str, ThemeError> {
    let bytes = key.as_bytes();
    let start = bytes
        .iter()
        .position(u8::is_ascii_digit)
        .ok_or_else(|| ThemeError::MalformedKey(key.to_string()))?;
    let run = bytes[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count()
        .min(3);
    Ok(&key[start..start + run])
}

/// Map one color scale into custom properties.
///
/// Every entry becomes `--{prefix}-{semantic}-{step}` with the color value
/// passed through unchanged. Entry count is not validated here; completeness
/// is the palette catalog's contract.
pub fn scale_variables(
    prefix: &str,
    semantic: &str,
    scale: &[(&str, &str)],
) -> Result<VariableMap, ThemeError> {
    let mut variables = VariableMap::new();
    for (key, value) in scale.iter().copied() {
        let step = parse_step(key)?;
        variables.insert(custom_property(prefix, semantic, step), value);
    }
    Ok(variables)
}

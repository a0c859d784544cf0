//! The radius variable ladder.

use crate::options::RadiusSize;
use crate::tokens::{VariableMap, custom_property, variable};

/// Base pixel radii for `--{prefix}-radius-1` through `-6`.
const RADIUS_BASES: [u32; 6] = [3, 4, 6, 8, 12, 16];

/// Build the radius variables for a theme: the scaling multiplier, the factor
/// of the chosen size preset, and six `calc()` steps over [`RADIUS_BASES`].
///
/// `scaling` is caller-supplied and propagated as-is; zero or negative values
/// are legal and collapse or invert every radius alike.
pub fn radius_variables(prefix: &str, scaling: f64, radius: RadiusSize) -> VariableMap {
    let mut variables = VariableMap::new();
    variables.insert(variable(prefix, "scaling"), scaling.to_string());
    variables.insert(variable(prefix, "radius-factor"), radius.factor());
    for (index, base) in RADIUS_BASES.iter().enumerate() {
        variables.insert(
            custom_property(prefix, "radius", &(index + 1).to_string()),
            format!("calc({base}px * var(--{prefix}-scaling) * var(--{prefix}-radius-factor))"),
        );
    }
    variables
}

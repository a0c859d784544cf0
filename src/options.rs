//! Theme options and their resolution into a fully-populated configuration.

use std::str::FromStr;

use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::ThemeError;

pub const DEFAULT_PREFIX: &str = "bw";
pub const DEFAULT_SCALING: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NeutralColor {
    Slate,
    Gray,
    Mauve,
    Sage,
    Olive,
    Sand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccentColor {
    Crimson,
    Lime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RadiusSize {
    None,
    Sm,
    Md,
    Lg,
    Full,
}

impl RadiusSize {
    /// The unit-less multiplier applied to the base radius ladder.
    pub const fn factor(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Sm => "0.75",
            Self::Md => "1",
            Self::Lg => "1.875",
            Self::Full => "1.5",
        }
    }
}

/// Raw user-facing options. Every field is optional; unset fields fall back to
/// documented defaults during [`ResolvedOptions::resolve`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeOptions {
    pub prefix: Option<String>,
    pub scaling: Option<f64>,
    pub neutral: Option<String>,
    pub accent: Option<String>,
    pub radius: Option<String>,
}

/// Fully-populated options, immutable after resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    pub prefix: String,
    pub scaling: f64,
    pub neutral: NeutralColor,
    pub accent: AccentColor,
    pub radius: RadiusSize,
}

impl ResolvedOptions {
    /// Fill unset fields with defaults and validate the enum fields.
    ///
    /// Out-of-enum strings fail here rather than surfacing later as a missing
    /// color or an unmatched radius preset.
    pub fn resolve(raw: &ThemeOptions) -> Result<Self, ThemeError> {
        Ok(Self {
            prefix: raw
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            scaling: raw.scaling.unwrap_or(DEFAULT_SCALING),
            neutral: parse_field("neutral", raw.neutral.as_deref(), NeutralColor::Olive)?,
            accent: parse_field("accent", raw.accent.as_deref(), AccentColor::Lime)?,
            radius: parse_field("radius", raw.radius.as_deref(), RadiusSize::Lg)?,
        })
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            scaling: DEFAULT_SCALING,
            neutral: NeutralColor::Olive,
            accent: AccentColor::Lime,
            radius: RadiusSize::Lg,
        }
    }
}

fn parse_field<T: FromStr>(
    field: &'static str,
    value: Option<&str>,
    default: T,
) -> Result<T, ThemeError> {
    match value {
        None => Ok(default),
        Some(raw) => T::from_str(raw).map_err(|_| ThemeError::UnrecognizedOption {
            field,
            value: raw.to_string(),
        }),
    }
}

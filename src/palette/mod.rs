//! Embedded 12-step color scales.
//!
//! Scale entries keep the palette library's native keys (`olive1`, `oliveA7`)
//! so the token layer sees the same key shape the palette exports. Each color
//! ships four scales: solid and alpha, for light and dark appearance.

mod crimson;
mod gray;
mod lime;
mod mauve;
mod olive;
mod sage;
mod sand;
mod slate;

use crate::options::{AccentColor, NeutralColor};

pub const SCALE_STEPS: usize = 12;

pub type ScaleEntries = [(&'static str, &'static str); SCALE_STEPS];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleSet {
    pub light: ScaleEntries,
    pub dark: ScaleEntries,
    pub alpha: ScaleEntries,
    pub dark_alpha: ScaleEntries,
}

impl NeutralColor {
    pub const fn scales(self) -> &'static ScaleSet {
        match self {
            Self::Slate => &slate::SLATE,
            Self::Gray => &gray::GRAY,
            Self::Mauve => &mauve::MAUVE,
            Self::Sage => &sage::SAGE,
            Self::Olive => &olive::OLIVE,
            Self::Sand => &sand::SAND,
        }
    }
}

impl AccentColor {
    pub const fn scales(self) -> &'static ScaleSet {
        match self {
            Self::Crimson => &crimson::CRIMSON,
            Self::Lime => &lime::LIME,
        }
    }
}

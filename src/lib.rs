//! Patina - build-time CSS theming for utility-class frameworks.
//!
//! From a small options object (prefix, neutral and accent colors, radius
//! preset, scaling multiplier) patina deterministically generates a palette of
//! CSS custom properties, a set of base styles and utility classes, and the
//! matching framework theme extensions. Everything is a pure transformation;
//! nothing here touches the filesystem or the network.
//!
//! ```
//! use patina::{ThemeOptions, stylesheet, theme_extension};
//!
//! let options = ThemeOptions {
//!     prefix: Some("ui".to_string()),
//!     ..ThemeOptions::default()
//! };
//! let css = stylesheet(&options).unwrap();
//! assert!(css.contains("--ui-neutral-1"));
//!
//! let extend = theme_extension(&options).unwrap();
//! assert_eq!(extend["colors"]["black"], "var(--ui-black)");
//! ```

pub mod error;
pub mod extend;
pub mod options;
pub mod palette;
pub mod styling;
pub mod theme;
pub mod tokens;

pub use error::ThemeError;
pub use extend::theme_extension;
pub use options::{AccentColor, NeutralColor, RadiusSize, ResolvedOptions, ThemeOptions};
pub use theme::stylesheet;

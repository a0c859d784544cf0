//! The type scale shared by base styles and the theme extension.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontSize {
    pub name: &'static str,
    pub size: &'static str,
    pub line_height: &'static str,
}

const fn font_size(name: &'static str, size: &'static str, line_height: &'static str) -> FontSize {
    FontSize {
        name,
        size,
        line_height,
    }
}

pub const FONT_SIZES: [FontSize; 8] = [
    font_size("body", "1rem", "1.5rem"),
    font_size("h1", "3.5rem", "3.75rem"),
    font_size("h2", "2.25rem", "2.625rem"),
    font_size("h3", "1.875rem", "2.25rem"),
    font_size("h4", "1.5rem", "2rem"),
    font_size("h5", "1.25rem", "1.75rem"),
    font_size("h6", "1.125rem", "1.5rem"),
    font_size("mini", "0.75rem", "1.5rem"),
];

pub fn lookup(name: &str) -> Option<&'static FontSize> {
    FONT_SIZES.iter().find(|entry| entry.name == name)
}

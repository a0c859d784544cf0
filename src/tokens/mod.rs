//! Token generation - custom property names and the ordered maps that hold them.

pub mod color;
pub mod radius;
pub mod typography;

/// An ordered mapping from custom property name to value.
///
/// Insertion order is preserved. Inserting an existing name replaces its value
/// in place, so when maps are merged the later entry wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, String)>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn merge(&mut self, other: Self) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl IntoIterator for VariableMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, String)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// `--{prefix}-{name}`
pub fn variable(prefix: &str, name: &str) -> String {
    format!("--{prefix}-{name}")
}

/// `--{prefix}-{semantic}-{step}`
///
/// Pure composition; callers are responsible for CSS-identifier-safe inputs.
pub fn custom_property(prefix: &str, semantic: &str, step: &str) -> String {
    format!("--{prefix}-{semantic}-{step}")
}

/// `var(--{prefix}-{name})`
pub fn reference(prefix: &str, name: &str) -> String {
    format!("var(--{prefix}-{name})")
}

use crate::tokens::VariableMap;

/// A CSS rule: a selector, its declarations, and nested child rules.
///
/// Declarations live in a [`VariableMap`], so setting the same property twice
/// keeps the later value - the same merge contract the token layer follows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    declarations: VariableMap,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: VariableMap::new(),
            children: Vec::new(),
        }
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.insert(name, value);
        self
    }

    /// Merge a whole variable map into this rule's declarations.
    pub fn variables(mut self, variables: VariableMap) -> Self {
        self.declarations.merge(variables);
        self
    }

    pub fn child(mut self, rule: CssRule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &VariableMap {
        &self.declarations
    }

    pub fn render(&self) -> String {
        self.render_internal(0)
    }

    fn render_internal(&self, indent: usize) -> String {
        let indent_str = "    ".repeat(indent);
        let inner_indent = "    ".repeat(indent + 1);

        let mut css = String::new();

        css.push_str(&format!("{}{} {{\n", indent_str, self.selector));

        for (name, value) in self.declarations.iter() {
            css.push_str(&format!("{inner_indent}{name}: {value};\n"));
        }

        for child in &self.children {
            css.push_str(&child.render_internal(indent + 1));
        }

        css.push_str(&format!("{indent_str}}}\n"));
        css
    }
}

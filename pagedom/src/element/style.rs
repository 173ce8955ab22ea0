/// Inline `style` declarations, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `cssText` string. Blank and malformed declarations are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        style.set_css_text(css_text);
        style
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set a property, replacing any previous value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|(p, _)| p == property)?;
        Some(self.declarations.remove(pos).1)
    }

    /// Replace every declaration, like assigning `style.cssText`.
    pub fn set_css_text(&mut self, css_text: &str) {
        self.declarations.clear();
        for decl in css_text.split(';') {
            let Some((property, value)) = decl.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            self.set(property, value);
        }
    }

    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline_css_text() {
        let style = InlineStyle::parse(
            "
            color: var(--error-color);
            font-size: 0.875rem;
            ;
            bogus
        ",
        );
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("color"), Some("var(--error-color)"));
        assert_eq!(style.get("font-size"), Some("0.875rem"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut style = InlineStyle::parse("width: 10px; height: 10px");
        style.set("width", "20px");
        assert_eq!(style.css_text(), "width: 20px; height: 10px;");
    }
}

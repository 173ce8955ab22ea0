use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::InlineStyle;
use crate::layout::Rect;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub style: InlineStyle,
    pub text: Option<String>,

    // Form control state
    pub value: String,
    pub disabled: bool,

    /// Box in page coordinates. `None` until a host assigns geometry.
    pub rect: Option<Rect>,

    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: InlineStyle::default(),
            text: None,
            value: String::new(),
            disabled: false,
            rect: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    /// Create an `input` with the given `type` attribute.
    pub fn input(kind: impl Into<String>) -> Self {
        Self::new("input").attr("type", kind)
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    /// Create a `<style>` element holding the given stylesheet text.
    pub fn style_sheet(css: impl Into<String>) -> Self {
        Self::new("style").text(css)
    }

    // Builders
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mark a form control as required (sets the `required` attribute).
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn css(mut self, css_text: &str) -> Self {
        self.style.set_css_text(css_text);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class)
        }
    }

    // Attributes
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn is_required(&self) -> bool {
        self.has_attr("required")
    }

    /// The `type` attribute, lowercased. Inputs without one are `text`.
    pub fn input_type(&self) -> String {
        match self.get_attr("type") {
            Some(kind) => kind.to_ascii_lowercase(),
            None if self.tag == "input" => "text".to_string(),
            None => String::new(),
        }
    }

    // Text
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Position of the first child matching the predicate.
    pub fn child_position(&self, pred: impl Fn(&Element) -> bool) -> Option<usize> {
        self.children.iter().position(pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_has_no_duplicates() {
        let mut el = Element::div().class("a");
        assert!(!el.add_class("a"));
        assert!(el.add_class("b"));
        assert_eq!(el.classes, vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_class() {
        let mut el = Element::div();
        assert!(el.toggle_class("open"));
        assert!(el.has_class("open"));
        assert!(!el.toggle_class("open"));
        assert!(!el.has_class("open"));
    }

    #[test]
    fn test_input_type_defaults_to_text() {
        assert_eq!(Element::new("input").input_type(), "text");
        assert_eq!(Element::input("EMAIL").input_type(), "email");
        assert_eq!(Element::div().input_type(), "");
    }

    #[test]
    fn test_generated_ids_use_tag_prefix() {
        let a = Element::span();
        let b = Element::span();
        assert!(a.id.starts_with("span-"));
        assert_ne!(a.id, b.id);
    }
}

use super::Element;

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Element {
    /// Serialize the subtree as HTML. Stylesheet text is emitted verbatim.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(&format!(" id=\"{}\"", escape(&self.id)));
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&self.classes.join(" "))));
        }
        for (name, value) in &self.attributes {
            if value.is_empty() {
                out.push_str(&format!(" {name}"));
            } else {
                out.push_str(&format!(" {name}=\"{}\"", escape(value)));
            }
        }
        if !self.style.is_empty() {
            out.push_str(&format!(" style=\"{}\"", escape(&self.style.css_text())));
        }
        if !self.value.is_empty() {
            out.push_str(&format!(" value=\"{}\"", escape(&self.value)));
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            if self.tag == "style" {
                out.push_str(text);
            } else {
                out.push_str(&escape(text));
            }
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_void_and_nested() {
        let el = Element::div()
            .id("group")
            .class("form-group")
            .child(Element::input("email").id("email").required().value("a<b"));
        assert_eq!(
            el.to_html(),
            "<div id=\"group\" class=\"form-group\">\
             <input id=\"email\" required type=\"email\" value=\"a&lt;b\"></div>"
        );
    }
}

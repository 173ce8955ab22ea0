//! A small CSS selector subset.
//!
//! Supports comma-separated lists of compound selectors made of an optional
//! tag (or `*`), `#id`, `.class`, `[attr]`, `[attr="value"]` and
//! `[attr^="prefix"]`. Combinators are rejected.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("combinators are not supported in '{0}'")]
    UnsupportedCombinator(String),
    #[error("expected a name after '{prefix}' in '{selector}'")]
    ExpectedName { prefix: char, selector: String },
    #[error("unclosed attribute selector in '{0}'")]
    UnclosedAttribute(String),
    #[error("unexpected character '{ch}' in '{selector}'")]
    UnexpectedChar { ch: char, selector: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if self.tag.as_ref().is_some_and(|tag| *tag != element.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| *id != element.id) {
            return false;
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| {
            // `input[type="text"]` matches inputs that omit the attribute.
            let typed_input =
                attr.name == "type" && attr.op != AttrOp::Exists && element.tag == "input";
            let value = if typed_input {
                Some(element.input_type())
            } else {
                element.get_attr(&attr.name).map(str::to_string)
            };
            match (&attr.op, value) {
                (_, None) => false,
                (AttrOp::Exists, Some(_)) => true,
                (AttrOp::Equals(expected), Some(v)) => v == *expected,
                (AttrOp::Prefix(prefix), Some(v)) => v.starts_with(prefix.as_str()),
            }
        })
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();
        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(SelectorError::Empty);
            }
            alternatives.push(parse_compound(part)?);
        }
        Ok(Self {
            source: input.trim().to_string(),
            alternatives,
        })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn ident_len(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '-' || *c == '_'))
        .map_or(s.len(), |(i, _)| i)
}

fn parse_compound(input: &str) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut rest = input;

    if let Some(stripped) = rest.strip_prefix('*') {
        rest = stripped;
    } else {
        let len = ident_len(rest);
        if len > 0 {
            compound.tag = Some(rest[..len].to_ascii_lowercase());
            rest = &rest[len..];
        }
    }

    while let Some(c) = rest.chars().next() {
        match c {
            '#' | '.' => {
                let len = ident_len(&rest[1..]);
                if len == 0 {
                    return Err(SelectorError::ExpectedName {
                        prefix: c,
                        selector: input.to_string(),
                    });
                }
                let name = rest[1..=len].to_string();
                if c == '#' {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
                rest = &rest[1 + len..];
            }
            '[' => {
                let end = rest
                    .find(']')
                    .ok_or_else(|| SelectorError::UnclosedAttribute(input.to_string()))?;
                compound.attrs.push(parse_attr(&rest[1..end], input)?);
                rest = &rest[end + 1..];
            }
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                return Err(SelectorError::UnsupportedCombinator(input.to_string()));
            }
            ch => {
                return Err(SelectorError::UnexpectedChar {
                    ch,
                    selector: input.to_string(),
                });
            }
        }
    }

    Ok(compound)
}

fn parse_attr(body: &str, selector: &str) -> Result<AttrMatch, SelectorError> {
    let (name, op) = if let Some((name, value)) = body.split_once("^=") {
        (name, AttrOp::Prefix(unquote(value)))
    } else if let Some((name, value)) = body.split_once('=') {
        (name, AttrOp::Equals(unquote(value)))
    } else {
        (body, AttrOp::Exists)
    };

    let name = name.trim();
    if name.is_empty() || ident_len(name) != name.len() {
        return Err(SelectorError::ExpectedName {
            prefix: '[',
            selector: selector.to_string(),
        });
    }

    Ok(AttrMatch {
        name: name.to_ascii_lowercase(),
        op,
    })
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner.to_string();
        }
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"#\""), "#");
        assert_eq!(unquote("'submit'"), "submit");
        assert_eq!(unquote(" bare "), "bare");
    }

    #[test]
    fn test_ident_len_stops_at_punctuation() {
        assert_eq!(ident_len("form-group.focused"), 10);
        assert_eq!(ident_len(""), 0);
    }
}

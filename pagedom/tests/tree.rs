use pagedom::element::{
    ancestors, closest, find_element, query_selector, query_selector_all, remove_element,
};
use pagedom::{Element, Selector, SelectorError};

fn login_form() -> Element {
    Element::form()
        .id("login")
        .child(
            Element::div()
                .id("group-user")
                .class("form-group")
                .child(Element::input("text").id("username").required()),
        )
        .child(
            Element::div()
                .id("group-pass")
                .class("form-group")
                .child(Element::input("password").id("password").required()),
        )
        .child(Element::input("checkbox").id("remember"))
        .child(
            Element::button()
                .id("submit")
                .class("btn")
                .attr("type", "submit"),
        )
}

fn sel(s: &str) -> Selector {
    Selector::parse(s).unwrap()
}

// ============================================================================
// Selector parsing
// ============================================================================

#[test]
fn test_parse_rejects_combinators() {
    assert_eq!(
        Selector::parse(".form-group .form-input"),
        Err(SelectorError::UnsupportedCombinator(
            ".form-group .form-input".to_string()
        ))
    );
    assert!(matches!(
        Selector::parse("div > span"),
        Err(SelectorError::UnsupportedCombinator(_))
    ));
}

#[test]
fn test_parse_rejects_empty_parts() {
    assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
    assert_eq!(Selector::parse(".a,,.b"), Err(SelectorError::Empty));
}

#[test]
fn test_parse_rejects_bad_names() {
    assert!(matches!(
        Selector::parse("div."),
        Err(SelectorError::ExpectedName { prefix: '.', .. })
    ));
    assert!(matches!(
        Selector::parse("a[href"),
        Err(SelectorError::UnclosedAttribute(_))
    ));
    assert!(matches!(
        Selector::parse("a:hover"),
        Err(SelectorError::UnexpectedChar { ch: ':', .. })
    ));
}

#[test]
fn test_display_round_trips_source() {
    let s = sel(" .glass-card, .document-card ");
    assert_eq!(s.to_string(), ".glass-card, .document-card");
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_attribute_prefix_match() {
    let s = sel("a[href^=\"#\"]");
    assert!(s.matches(&Element::anchor("#top")));
    assert!(!s.matches(&Element::anchor("/docs")));
    assert!(!s.matches(&Element::new("a")));
}

#[test]
fn test_attribute_exists_and_equals() {
    let form = login_form();
    assert_eq!(
        query_selector_all(&form, &sel("input[required]")),
        vec!["username", "password"]
    );
    assert_eq!(
        query_selector(&form, &sel("button[type=\"submit\"]")),
        Some("submit".to_string())
    );
}

#[test]
fn test_input_without_type_matches_text() {
    let input = Element::new("input");
    assert!(sel("input[type=text]").matches(&input));
    assert!(!sel("input[type]").matches(&input));
}

#[test]
fn test_selector_list_in_document_order() {
    let root = Element::div()
        .id("root")
        .child(Element::div().id("b").class("document-card"))
        .child(Element::div().id("a").class("glass-card"));
    assert_eq!(
        query_selector_all(&root, &sel(".glass-card, .document-card")),
        vec!["b", "a"]
    );
}

// ============================================================================
// Tree queries
// ============================================================================

#[test]
fn test_closest_includes_self_and_walks_up() {
    let form = login_form();
    let group = sel(".form-group");
    assert_eq!(closest(&form, "username", &group), Some("group-user".into()));
    assert_eq!(closest(&form, "group-pass", &group), Some("group-pass".into()));
    assert_eq!(closest(&form, "remember", &group), None);
    assert_eq!(closest(&form, "missing", &group), None);
}

#[test]
fn test_ancestors_nearest_first() {
    let form = login_form();
    assert_eq!(ancestors(&form, "password"), vec!["group-pass", "login"]);
    assert!(ancestors(&form, "missing").is_empty());
}

#[test]
fn test_remove_element_detaches_subtree() {
    let mut form = login_form();
    let removed = remove_element(&mut form, "group-user").unwrap();
    assert_eq!(removed.children[0].id, "username");
    assert!(find_element(&form, "username").is_none());
    assert!(remove_element(&mut form, "group-user").is_none());
}

#[test]
fn test_root_cannot_be_removed() {
    let mut form = login_form();
    assert!(remove_element(&mut form, "login").is_none());
}

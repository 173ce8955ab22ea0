mod html;
mod node;
mod style;

pub use node::Element;
pub use style::InlineStyle;

use crate::selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }
    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

pub fn contains(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

/// IDs from the root down to the element (inclusive), or None if absent.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }
    for child in &root.children {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }
    None
}

/// Ancestor IDs of an element, nearest first. Empty if the element is absent.
pub fn ancestors(root: &Element, id: &str) -> Vec<String> {
    let Some(mut path) = path_to(root, id) else {
        return Vec::new();
    };
    path.pop();
    path.reverse();
    path
}

pub fn parent_id(root: &Element, id: &str) -> Option<String> {
    ancestors(root, id).into_iter().next()
}

/// All matching element IDs in document (pre-)order, root included.
pub fn query_selector_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut out = Vec::new();
    collect_matches(root, selector, &mut out);
    out
}

fn collect_matches(element: &Element, selector: &Selector, out: &mut Vec<String>) {
    if selector.matches(element) {
        out.push(element.id.clone());
    }
    for child in &element.children {
        collect_matches(child, selector, out);
    }
}

/// First matching element ID in document order.
pub fn query_selector(root: &Element, selector: &Selector) -> Option<String> {
    if selector.matches(root) {
        return Some(root.id.clone());
    }
    root.children
        .iter()
        .find_map(|child| query_selector(child, selector))
}

/// The element itself or its nearest ancestor matching the selector.
pub fn closest(root: &Element, id: &str, selector: &Selector) -> Option<String> {
    let path = path_to(root, id)?;
    path.iter()
        .rev()
        .find(|ancestor_id| {
            find_element(root, ancestor_id).is_some_and(|el| selector.matches(el))
        })
        .cloned()
}

/// Append a child to the element with `parent_id`. Returns false if the parent is absent.
pub fn append_child(root: &mut Element, parent_id: &str, child: Element) -> bool {
    match find_element_mut(root, parent_id) {
        Some(parent) => {
            parent.children.push(child);
            true
        }
        None => false,
    }
}

/// Detach an element (and its subtree). The root itself cannot be removed.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    if let Some(pos) = root.children.iter().position(|c| c.id == id) {
        return Some(root.children.remove(pos));
    }
    root.children
        .iter_mut()
        .find_map(|child| remove_element(child, id))
}

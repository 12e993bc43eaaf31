mod node;
mod path;

pub use node::Element;
pub use path::ElementPath;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id_str() == Some(id) {
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
    if root.id_str() == Some(id) {
        return Some(root);
    }

    root.children
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// First element (depth-first, document order, root included) matching `predicate`.
pub fn find_first<'a, F>(root: &'a Element, predicate: F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    fn walk<'a>(el: &'a Element, predicate: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
        if predicate(el) {
            return Some(el);
        }
        el.children.iter().find_map(|child| walk(child, predicate))
    }

    walk(root, &predicate)
}

/// All elements matching `predicate`, in document order, root included.
pub fn find_all<'a, F>(root: &'a Element, predicate: F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    fn walk<'a>(el: &'a Element, predicate: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if predicate(el) {
            out.push(el);
        }
        for child in &el.children {
            walk(child, predicate, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &predicate, &mut out);
    out
}

/// Visit every element mutably, depth-first in document order.
pub fn for_each_mut<F>(root: &mut Element, f: &mut F)
where
    F: FnMut(&mut Element),
{
    f(root);
    for child in &mut root.children {
        for_each_mut(child, f);
    }
}

//! Positional addressing of elements.
//!
//! Indicators and error slots rarely carry ids, so field-group records point
//! at them by child-index path from a fixed root. The path stays valid as
//! long as the tree shape does not change; state mutations never change it.

use std::fmt;

use super::Element;

/// Child-index path from a root element. The empty path is the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementPath(Vec<usize>);

impl ElementPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Path of the `index`-th child of this element.
    pub fn join(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// `rel` interpreted relative to the element at `self`.
    pub fn append(&self, rel: &ElementPath) -> Self {
        let mut indices = self.0.clone();
        indices.extend_from_slice(&rel.0);
        Self(indices)
    }

    pub fn resolve<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.0
            .iter()
            .try_fold(root, |el, &index| el.children.get(index))
    }

    pub fn resolve_mut<'a>(&self, root: &'a mut Element) -> Option<&'a mut Element> {
        self.0
            .iter()
            .try_fold(root, |el, &index| el.children.get_mut(index))
    }

    /// Paths of all descendants of `root` (root included) matching
    /// `predicate`, in document order.
    pub fn find_all<F>(root: &Element, predicate: F) -> Vec<ElementPath>
    where
        F: Fn(&Element) -> bool,
    {
        fn walk(
            el: &Element,
            path: ElementPath,
            predicate: &dyn Fn(&Element) -> bool,
            out: &mut Vec<ElementPath>,
        ) {
            if predicate(el) {
                out.push(path.clone());
            }
            for (index, child) in el.children.iter().enumerate() {
                walk(child, path.join(index), predicate, out);
            }
        }

        let mut out = Vec::new();
        walk(root, ElementPath::root(), &predicate, &mut out);
        out
    }

    /// Path of the first element matching `predicate`.
    pub fn find_first<F>(root: &Element, predicate: F) -> Option<ElementPath>
    where
        F: Fn(&Element) -> bool,
    {
        fn walk(
            el: &Element,
            path: ElementPath,
            predicate: &dyn Fn(&Element) -> bool,
        ) -> Option<ElementPath> {
            if predicate(el) {
                return Some(path);
            }
            el.children
                .iter()
                .enumerate()
                .find_map(|(index, child)| walk(child, path.join(index), predicate))
        }

        walk(root, ElementPath::root(), &predicate)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for index in &self.0 {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

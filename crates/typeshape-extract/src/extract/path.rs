//! Traversal path for cycle-safe shape expansion
//!
//! The resolver expands a class's shape only when the class is not already
//! being expanded further up the current call chain. The path is the
//! ordered set of those classes. Entering pushes a name and hands out a
//! [`PathGuard`]; dropping the guard pops it again, so sibling branches see
//! the path exactly as their parent left it.

use indexmap::IndexSet;
use std::ops::{Deref, DerefMut};

/// Classes currently being expanded, outermost first
#[derive(Debug, Default)]
pub struct TraversalPath {
    names: IndexSet<String>,
}

impl TraversalPath {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `full_name`, or return `None` if it is already on the path
    pub fn enter(&mut self, full_name: &str) -> Option<PathGuard<'_>> {
        if self.names.contains(full_name) {
            return None;
        }
        self.names.insert(full_name.to_string());
        Some(PathGuard { path: self })
    }

    /// Whether `full_name` is on the path
    pub fn contains(&self, full_name: &str) -> bool {
        self.names.contains(full_name)
    }

    /// Number of classes on the path
    pub fn depth(&self) -> usize {
        self.names.len()
    }
}

/// Scope of one class on the path; pops it on drop
#[derive(Debug)]
pub struct PathGuard<'p> {
    path: &'p mut TraversalPath,
}

impl Deref for PathGuard<'_> {
    type Target = TraversalPath;

    fn deref(&self) -> &TraversalPath {
        self.path
    }
}

impl DerefMut for PathGuard<'_> {
    fn deref_mut(&mut self) -> &mut TraversalPath {
        self.path
    }
}

impl Drop for PathGuard<'_> {
    fn drop(&mut self) {
        self.path.names.pop();
    }
}

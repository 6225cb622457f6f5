use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use hashlink::LinkedHashMap;

// =============================================================================
// Entry Kind
// =============================================================================

/// Kind of node stored in a directory mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "folder"),
        }
    }
}

// =============================================================================
// Directory Handle
// =============================================================================

/// Child mapping of a directory, in insertion order.
pub type Children = LinkedHashMap<String, FsEntry>;

/// Reference-counted handle to a directory's child mapping.
///
/// Cloning the handle does not copy the mapping: both handles observe the
/// same children. Use [`DirHandle::deep_clone`] for an independent copy.
#[derive(Clone, Default)]
pub struct DirHandle(Rc<RefCell<Children>>);

impl DirHandle {
    /// Create a handle to a new, empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn borrow(&self) -> Ref<'_, Children> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Children> {
        self.0.borrow_mut()
    }

    /// Returns true if both handles point at the same mapping object.
    #[cfg(test)]
    pub(crate) fn shares_mapping(&self, other: &DirHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Child names in insertion order.
    #[cfg(test)]
    pub(crate) fn names(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Recursively duplicate the mapping and every entry below it.
    pub fn deep_clone(&self) -> Self {
        let copied: Children = self
            .0
            .borrow()
            .iter()
            .map(|(name, entry)| (name.clone(), entry.deep_clone()))
            .collect();
        Self(Rc::new(RefCell::new(copied)))
    }
}

impl fmt::Debug for DirHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.borrow().iter()).finish()
    }
}

// =============================================================================
// Filesystem Entry
// =============================================================================

/// A node of the in-memory tree.
///
/// `Clone` is shallow for directories: the clone aliases the original's
/// child mapping.
#[derive(Clone, Debug)]
pub enum FsEntry {
    File { content: String },
    Directory { children: DirHandle },
}

impl FsEntry {
    /// Create a file holding `content`.
    pub fn file(content: impl Into<String>) -> Self {
        FsEntry::File {
            content: content.into(),
        }
    }

    /// Create an empty directory.
    pub fn directory() -> Self {
        FsEntry::Directory {
            children: DirHandle::new(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            FsEntry::File { .. } => EntryKind::File,
            FsEntry::Directory { .. } => EntryKind::Directory,
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsEntry::File { content } => Some(content),
            FsEntry::Directory { .. } => None,
        }
    }

    /// Child mapping handle (directories only).
    pub fn children(&self) -> Option<&DirHandle> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    /// Copy this entry without sharing any directory mapping with it.
    pub fn deep_clone(&self) -> Self {
        match self {
            FsEntry::File { content } => FsEntry::file(content.clone()),
            FsEntry::Directory { children } => FsEntry::Directory {
                children: children.deep_clone(),
            },
        }
    }
}

// =============================================================================
// Virtual Path
// =============================================================================

/// Ordered directory-name segments from the root.
///
/// The empty path is the root itself. Segments are plain names; no `.`/`..`
/// handling is performed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualPath(Vec<String>);

impl VirtualPath {
    /// The root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// A new path with `name` appended.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut joined = self.clone();
        joined.push(name);
        joined
    }

    /// Split into the parent segments and the final name.
    pub fn split_last(&self) -> Option<(&str, &[String])> {
        self.0
            .split_last()
            .map(|(last, parent)| (last.as_str(), parent))
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.0.join("/"))
        }
    }
}

impl<S: Into<String>> FromIterator<S> for VirtualPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind() {
        assert_eq!(FsEntry::file("x").kind(), EntryKind::File);
        assert_eq!(FsEntry::directory().kind(), EntryKind::Directory);
        assert!(FsEntry::directory().is_directory());
        assert_eq!(FsEntry::file("x").content(), Some("x"));
        assert!(FsEntry::directory().content().is_none());
    }

    #[test]
    fn test_clone_aliases_directory() {
        let dir = FsEntry::directory();
        let alias = dir.clone();
        dir.children()
            .unwrap()
            .borrow_mut()
            .insert("a".to_string(), FsEntry::file("1"));

        let children = alias.children().unwrap();
        assert!(children.shares_mapping(dir.children().unwrap()));
        assert_eq!(children.names(), vec!["a"]);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let dir = FsEntry::directory();
        let nested = FsEntry::directory();
        nested
            .children()
            .unwrap()
            .borrow_mut()
            .insert("note".to_string(), FsEntry::file("hi"));
        dir.children()
            .unwrap()
            .borrow_mut()
            .insert("sub".to_string(), nested);

        let copy = dir.deep_clone();
        let copy_children = copy.children().unwrap();
        assert!(!copy_children.shares_mapping(dir.children().unwrap()));

        // Mutating the copy's nested file must not leak into the original
        let copy_sub = copy_children.borrow().get("sub").cloned().unwrap();
        copy_sub
            .children()
            .unwrap()
            .borrow_mut()
            .insert("note".to_string(), FsEntry::file("changed"));

        let original_sub = dir.children().unwrap().borrow().get("sub").cloned().unwrap();
        let original_note = original_sub.children().unwrap().borrow().get("note").cloned();
        assert_eq!(original_note.unwrap().content(), Some("hi"));
    }

    #[test]
    fn test_virtual_path_display() {
        assert_eq!(VirtualPath::root().to_string(), "/");
        let path: VirtualPath = ["docs", "notes"].into_iter().collect();
        assert_eq!(path.to_string(), "docs/notes");
        assert!(!path.is_root());
    }

    #[test]
    fn test_virtual_path_split_last() {
        let path = VirtualPath::root().join("a").join("b");
        let (last, parent) = path.split_last().unwrap();
        assert_eq!(last, "b");
        assert_eq!(parent, ["a".to_string()]);
        assert!(VirtualPath::root().split_last().is_none());
    }
}

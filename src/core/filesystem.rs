use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::error::FsError;
use crate::models::{DirHandle, EntryKind, FsEntry, VirtualPath};

// =============================================================================
// Options
// =============================================================================

/// How a path walk treats a segment that is missing or names a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveMode {
    /// Fail with `NotFound` / `NotADirectory`.
    #[default]
    Strict,
    /// Substitute a fresh, detached empty directory and keep walking.
    /// Anything written through that view is lost.
    Lenient,
}

/// What `cp` produces for a directory source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyMode {
    /// Recursively duplicate mappings and file contents.
    #[default]
    Deep,
    /// Both names share one child mapping; edits through either are visible
    /// through the other.
    Shared,
}

/// Behavioural switches for [`VirtualFs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FsOptions {
    pub resolve: ResolveMode,
    pub copy: CopyMode,
    /// Allow `cd` onto a file entry. The resulting cursor cannot be resolved
    /// in strict mode.
    pub cd_into_files: bool,
}

impl FsOptions {
    /// Lenient resolution, shared copies and `cd` into files all enabled.
    pub fn compat() -> Self {
        Self {
            resolve: ResolveMode::Lenient,
            copy: CopyMode::Shared,
            cd_into_files: true,
        }
    }
}

/// Directory entry returned by [`VirtualFs::list_current`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

// =============================================================================
// VirtualFs
// =============================================================================

/// In-memory hierarchical tree plus the current-directory cursor.
///
/// One instance is created per session and owned by it. Every operation
/// checks its preconditions before mutating, so an `Err` never leaves a
/// partial change behind.
///
/// # Addressing
///
/// - Names are single segments looked up in the current directory.
/// - Paths ([`VirtualPath`]) are segment lists from the root; there is no
///   `.`/`..` handling.
/// - The root is never an entry of any mapping, so it cannot be removed or
///   renamed.
#[derive(Debug, Default)]
pub struct VirtualFs {
    root: DirHandle,
    cwd: VirtualPath,
    options: FsOptions,
}

impl VirtualFs {
    pub fn new(options: FsOptions) -> Self {
        Self {
            root: DirHandle::new(),
            cwd: VirtualPath::root(),
            options,
        }
    }

    pub fn options(&self) -> FsOptions {
        self.options
    }

    /// Current directory cursor.
    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    /// Cursor joined with `/`; the root displays as `/`.
    pub fn current_path_string(&self) -> String {
        self.cwd.to_string()
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    /// Walk from the root, one mapping lookup per segment.
    ///
    /// In [`ResolveMode::Lenient`] a missing or non-directory segment yields
    /// a detached empty directory instead of an error.
    pub fn resolve(&self, path: &[String]) -> Result<DirHandle, FsError> {
        let mut current = self.root.clone();

        for segment in path {
            let next = match current.borrow().get(segment) {
                Some(FsEntry::Directory { children }) => Ok(children.clone()),
                Some(FsEntry::File { .. }) => Err(FsError::NotADirectory(segment.clone())),
                None => Err(FsError::NotFound(segment.clone())),
            };

            current = match (next, self.options.resolve) {
                (Ok(children), _) => children,
                (Err(err), ResolveMode::Strict) => return Err(err),
                (Err(err), ResolveMode::Lenient) => {
                    warn!(
                        %segment,
                        %err,
                        "unresolvable path segment, using detached empty directory"
                    );
                    DirHandle::new()
                }
            };
        }

        Ok(current)
    }

    /// Resolve the cursor.
    pub fn current_dir(&self) -> Result<DirHandle, FsError> {
        self.resolve(self.cwd.segments())
    }

    // -------------------------------------------------------------------------
    // Creation and removal
    // -------------------------------------------------------------------------

    /// Insert a new node under `parent`.
    ///
    /// An existing entry with the same name is replaced in place (it keeps
    /// its listing position). `content` is ignored for directories.
    pub fn create(
        &mut self,
        name: &str,
        content: &str,
        kind: EntryKind,
        parent: &VirtualPath,
    ) -> Result<(), FsError> {
        validate_name(name)?;
        let dir = self.resolve(parent.segments())?;
        let entry = match kind {
            EntryKind::File => FsEntry::file(content),
            EntryKind::Directory => FsEntry::directory(),
        };

        let replaced = dir.borrow_mut().replace(name.to_string(), entry);
        debug!(%name, %kind, %parent, overwritten = replaced.is_some(), "created entry");
        Ok(())
    }

    /// Delete `name` (file or directory, empty or not) from the current directory.
    pub fn remove(&mut self, name: &str) -> Result<FsEntry, FsError> {
        let dir = self.current_dir()?;
        let removed = dir.borrow_mut().remove(name);
        let removed = removed.ok_or_else(|| FsError::NotFound(name.to_string()))?;
        debug!(%name, "removed entry");
        Ok(removed)
    }

    /// Delete `name` only if it is an empty directory.
    pub fn remove_dir(&mut self, name: &str) -> Result<(), FsError> {
        let dir = self.current_dir()?;
        let removable = dir
            .borrow()
            .get(name)
            .and_then(FsEntry::children)
            .is_some_and(DirHandle::is_empty);
        if !removable {
            return Err(FsError::NotEmptyOrNotFound(name.to_string()));
        }

        dir.borrow_mut().remove(name);
        debug!(%name, "removed directory");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // File content
    // -------------------------------------------------------------------------

    /// Read a file: resolve all but the last segment, then look up the last.
    pub fn open_file(&self, path: &VirtualPath) -> Result<String, FsError> {
        let (name, parent) = path
            .split_last()
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        let dir = self.resolve(parent)?;
        let content = dir
            .borrow()
            .get(name)
            .and_then(FsEntry::content)
            .map(str::to_string);
        content.ok_or_else(|| FsError::NotFound(name.to_string()))
    }

    /// Replace a file's content in place; returns a confirmation line.
    pub fn edit_file(&mut self, path: &VirtualPath, new_content: &str) -> Result<String, FsError> {
        let (name, parent) = path
            .split_last()
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        let dir = self.resolve(parent)?;
        let mut dir = dir.borrow_mut();

        match dir.get_mut(name) {
            Some(FsEntry::File { content }) => {
                *content = new_content.to_string();
                debug!(%path, "edited file");
                Ok(format!("File '{}' edited successfully.", name))
            }
            _ => Err(FsError::NotFound(name.to_string())),
        }
    }

    /// Read a file in the current directory.
    pub fn cat(&self, name: &str) -> Result<String, FsError> {
        self.open_file(&self.cwd.join(name))
    }

    // -------------------------------------------------------------------------
    // Sibling operations (current directory only)
    // -------------------------------------------------------------------------

    /// Move `source` to the sibling name `destination`. Never overwrites.
    pub fn move_entry(&mut self, source: &str, destination: &str) -> Result<(), FsError> {
        validate_name(destination)?;
        let dir = self.current_dir()?;
        let mut dir = dir.borrow_mut();

        if !dir.contains_key(source) {
            return Err(FsError::NotFound(source.to_string()));
        }
        if dir.contains_key(destination) {
            return Err(FsError::AlreadyExists(destination.to_string()));
        }

        if let Some(entry) = dir.remove(source) {
            dir.insert(destination.to_string(), entry);
        }
        debug!(%source, %destination, "moved entry");
        Ok(())
    }

    /// Copy `source` to the sibling name `destination`, overwriting silently.
    ///
    /// Directory sources are duplicated according to [`CopyMode`].
    pub fn copy_entry(&mut self, source: &str, destination: &str) -> Result<(), FsError> {
        validate_name(destination)?;
        let dir = self.current_dir()?;
        let mut dir = dir.borrow_mut();

        let entry = match (dir.get(source), self.options.copy) {
            (None, _) => return Err(FsError::NotFound(source.to_string())),
            (Some(entry), CopyMode::Deep) => entry.deep_clone(),
            (Some(entry), CopyMode::Shared) => entry.clone(),
        };

        dir.replace(destination.to_string(), entry);
        debug!(%source, %destination, mode = ?self.options.copy, "copied entry");
        Ok(())
    }

    /// Rename `old_name` to `new_name`.
    ///
    /// Unlike [`move_entry`](Self::move_entry), an existing `new_name` is
    /// overwritten without complaint.
    pub fn rename_entry(&mut self, old_name: &str, new_name: &str) -> Result<(), FsError> {
        validate_name(new_name)?;
        let dir = self.current_dir()?;
        let mut dir = dir.borrow_mut();

        let entry = dir
            .remove(old_name)
            .ok_or_else(|| FsError::NotFound(old_name.to_string()))?;
        let replaced = dir.replace(new_name.to_string(), entry);
        debug!(%old_name, %new_name, overwritten = replaced.is_some(), "renamed entry");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Listing and navigation
    // -------------------------------------------------------------------------

    /// Names with their kinds, in insertion order.
    pub fn list_current(&self) -> Result<Vec<DirEntry>, FsError> {
        let dir = self.current_dir()?;
        let entries = dir
            .borrow()
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                kind: entry.kind(),
            })
            .collect();
        Ok(entries)
    }

    /// Descend into `name`, an entry of the current directory.
    pub fn change_dir(&mut self, name: &str) -> Result<(), FsError> {
        let dir = self.current_dir()?;
        let is_directory = dir.borrow().get(name).map(FsEntry::is_directory);

        match is_directory {
            None => return Err(FsError::NotFound(name.to_string())),
            Some(false) if !self.options.cd_into_files => {
                return Err(FsError::NotADirectory(name.to_string()));
            }
            Some(_) => self.cwd.push(name),
        }

        debug!(cwd = %self.cwd, "changed directory");
        Ok(())
    }

    /// Reset the cursor to the root.
    pub fn change_to_root(&mut self) {
        self.cwd = VirtualPath::root();
    }
}

/// `/` is reserved for `cd /`, so no entry name may contain it.
fn validate_name(name: &str) -> Result<(), FsError> {
    if name.contains('/') {
        return Err(FsError::InvalidName(name.to_string()));
    }
    Ok(())
}

use crate::entry::{EntryKind, WalkEntry};
use crate::error::WalkError;
use logging::trace_walk;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::vec;

/// Boxed predicate consulted for every directory or file the walker visits.
pub(crate) type EntryFilter<'a> = Box<dyn FnMut(&WalkEntry) -> bool + 'a>;

/// Stack-driven depth-first traversal over a single root.
pub(crate) struct Walker<'a> {
    root: PathBuf,
    deep_filter: EntryFilter<'a>,
    entry_filter: EntryFilter<'a>,
    sort_entries: bool,
    stack: Vec<DirectoryState>,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(
        root: PathBuf,
        deep_filter: EntryFilter<'a>,
        entry_filter: EntryFilter<'a>,
        sort_entries: bool,
    ) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        trace_walk!("walking {:?}", root);

        let state = DirectoryState::read(root.clone(), PathBuf::new(), 0, sort_entries)?;

        Ok(Self {
            root,
            deep_filter,
            entry_filter,
            sort_entries,
            stack: vec![state],
        })
    }

    /// Drains the traversal, returning the surviving entries in pre-order.
    pub(crate) fn run(mut self) -> Result<Vec<WalkEntry>, WalkError> {
        let mut entries = Vec::new();

        loop {
            let entry = {
                let Some(state) = self.stack.last_mut() else {
                    break;
                };

                if let Some(child) = state.children.next() {
                    let relative_path = state.relative_prefix.join(&child.name);
                    WalkEntry {
                        full_path: self.root.join(&relative_path),
                        relative_path,
                        name: child.name,
                        kind: child.kind,
                        depth: state.depth + 1,
                    }
                } else {
                    self.stack.pop();
                    continue;
                }
            };

            match entry.kind {
                EntryKind::Directory => {
                    if !(self.deep_filter)(&entry) {
                        trace_walk!("pruned directory {:?}", entry.relative_path);
                        continue;
                    }
                    let state = DirectoryState::read(
                        entry.full_path.clone(),
                        entry.relative_path.clone(),
                        entry.depth,
                        self.sort_entries,
                    )?;
                    entries.push(entry);
                    self.stack.push(state);
                }
                EntryKind::File => {
                    if (self.entry_filter)(&entry) {
                        entries.push(entry);
                    }
                }
            }
        }

        trace_walk!("collected {} entries under {:?}", entries.len(), self.root);
        Ok(entries)
    }
}

struct Child {
    name: OsString,
    kind: EntryKind,
}

/// Children of one directory, read in a single pass and consumed in order.
struct DirectoryState {
    relative_prefix: PathBuf,
    children: vec::IntoIter<Child>,
    depth: usize,
}

impl DirectoryState {
    fn read(
        fs_path: PathBuf,
        relative_prefix: PathBuf,
        depth: usize,
        sort_entries: bool,
    ) -> Result<Self, WalkError> {
        let read_dir =
            fs::read_dir(&fs_path).map_err(|error| WalkError::read_dir(fs_path.clone(), error))?;

        let mut children = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::read_dir_entry(fs_path.clone(), error))?;
            let file_type = entry
                .file_type()
                .map_err(|error| WalkError::file_type(entry.path(), error))?;

            // Symlinks and special files are dropped here, before any filter sees them.
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                continue;
            };

            children.push(Child {
                name: entry.file_name(),
                kind,
            });
        }

        if sort_entries {
            children.sort_by(|a, b| a.name.cmp(&b.name));
        }

        trace_walk!("read {} entries from {:?}", children.len(), fs_path);

        Ok(Self {
            relative_prefix,
            children: children.into_iter(),
            depth,
        })
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(normalize(&path))
    } else {
        let cwd = env::current_dir().map_err(|error| WalkError::current_dir(path.clone(), error))?;
        Ok(normalize(&cwd.join(path)))
    }
}

/// Lexically removes `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

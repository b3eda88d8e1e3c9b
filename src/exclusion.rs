//! Exact-filename exclusion list.
//!
//! Names are compared literally against a file's base name. There is no glob,
//! path or case folding: `notes.txt` does not exclude `Notes.txt` or
//! `sub/notes.txt`.

use std::collections::HashSet;
use std::ffi::OsStr;

use crate::plan::FileEntry;

/// The set of filenames a run must leave in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains_name(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.names.contains(name))
    }

    /// True iff the entry's base filename is one of the excluded names.
    pub fn is_excluded(&self, entry: &FileEntry) -> bool {
        self.contains_name(entry.name())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let set: ExclusionSet = ["notes.txt"].into_iter().collect();
        assert!(set.is_excluded(&FileEntry::new("notes.txt")));
        assert!(!set.is_excluded(&FileEntry::new("Notes.txt")));
        assert!(!set.is_excluded(&FileEntry::new("notes.txt.bak")));
        assert!(!set.is_excluded(&FileEntry::new("otes.txt")));
    }

    #[test]
    fn test_no_glob_semantics() {
        let set: ExclusionSet = ["*.txt"].into_iter().collect();
        assert!(!set.is_excluded(&FileEntry::new("notes.txt")));
        assert!(set.is_excluded(&FileEntry::new("*.txt")));
    }

    #[test]
    fn test_path_like_names_do_not_match_base_names() {
        let set: ExclusionSet = ["sub/notes.txt"].into_iter().collect();
        assert!(!set.is_excluded(&FileEntry::new("notes.txt")));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::new();
        assert!(set.is_empty());
        assert!(!set.is_excluded(&FileEntry::new("anything")));
    }

    #[test]
    fn test_extend_deduplicates() {
        let mut set = ExclusionSet::new();
        set.insert("a.txt");
        set.extend(vec!["a.txt".to_string(), "b.txt".to_string()]);
        assert_eq!(set.len(), 2);
    }
}

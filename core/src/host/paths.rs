use std::collections::HashSet;
use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::Level;

use crate::errors::ViewerError;
use crate::logging::log_failure;

fn children<F>(parent: &Path, predicate: F) -> Result<Vec<PathBuf>, ViewerError>
where
    F: Fn(&Path) -> bool,
{
    let entries = read_dir(parent).map_err(|source| ViewerError::Io {
        path: parent.to_path_buf(),
        source,
    })?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| predicate(path))
        .collect();
    paths.sort_unstable();
    Ok(paths)
}

/// Resolve a relative path against the working directory.
pub fn absolute(path: &Path) -> Result<PathBuf, ViewerError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let base = std::env::current_dir().map_err(|source| ViewerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(base.join(path))
}

fn has_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.contains(&ext.to_ascii_lowercase()))
        .unwrap_or(false)
}

/// Files directly under `parent` whose extension is in `extensions`
/// (lower-case), sorted by path.
pub fn child_files(
    parent: &Path,
    extensions: &HashSet<String>,
) -> Result<Vec<PathBuf>, ViewerError> {
    children(parent, |path| path.is_file() && has_extension(path, extensions))
}

/// Directories directly under `parent`, sorted by path.
pub fn child_directories(parent: &Path) -> Result<Vec<PathBuf>, ViewerError> {
    children(parent, |path| path.is_dir())
}

/// Pre-order successor of `dir`: its first child, otherwise the first later
/// sibling of `dir` or of the nearest ancestor that has one.
pub fn next_directory(dir: &Path) -> Option<PathBuf> {
    if let Ok(children) = child_directories(dir) {
        if let Some(first) = children.into_iter().next() {
            return Some(first);
        }
    }

    let mut current = dir;
    while let Some(parent) = current.parent() {
        match child_directories(parent) {
            Ok(siblings) => {
                if let Some(next) = siblings.into_iter().find(|d| d.as_path() > current) {
                    return Some(next);
                }
            }
            Err(err) => log_failure(Level::Debug, "peek.host", "skipping unreadable parent", &err),
        }
        current = parent;
    }

    None
}

/// Pre-order predecessor of `dir`: the deepest last descendant of the
/// previous sibling, or the parent when `dir` is the first child.
pub fn prev_directory(dir: &Path) -> Option<PathBuf> {
    let parent = dir.parent()?;
    match child_directories(parent) {
        Ok(siblings) => match siblings.into_iter().rev().find(|d| d.as_path() < dir) {
            Some(sibling) => Some(last_descendant(sibling)),
            None => Some(parent.to_path_buf()),
        },
        Err(err) => {
            log_failure(Level::Debug, "peek.host", "skipping unreadable parent", &err);
            None
        }
    }
}

fn last_descendant(mut dir: PathBuf) -> PathBuf {
    while let Ok(mut children) = child_directories(&dir) {
        match children.pop() {
            Some(child) => dir = child,
            None => break,
        }
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fixtures::{rel, tree};

    fn txt() -> HashSet<String> {
        HashSet::from([String::from("txt")])
    }

    fn names(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths.iter().map(|p| rel(root, p)).collect()
    }

    #[test]
    fn absolute_joins_relative_paths_onto_working_directory() {
        let resolved = absolute(Path::new("a.png")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("a.png"));
        let root = tree("txt");
        assert_eq!(absolute(root.path()).unwrap(), root.path());
    }

    #[test]
    fn child_files_filters_and_sorts() {
        let root = tree("txt");
        let base = root.path();

        let files = child_files(&base.join("a/a"), &txt()).unwrap();
        assert_eq!(names(base, &files), vec!["a/a/a.txt", "a/a/b.txt", "a/a/c.txt"]);

        let files = child_files(&base.join("a"), &txt()).unwrap();
        assert_eq!(names(base, &files), vec!["a/d.txt"]);

        assert!(child_files(&base.join("a/c"), &txt()).unwrap().is_empty());
    }

    #[test]
    fn child_files_matches_extension_case_insensitively() {
        let root = tree("TXT");
        let files = child_files(&root.path().join("c"), &txt()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(child_files(&root.path().join("c"), &HashSet::from(["png".to_string()]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn child_directories_lists_only_directories() {
        let root = tree("txt");
        let base = root.path();
        let dirs = child_directories(base).unwrap();
        assert_eq!(names(base, &dirs), vec!["a", "b", "c"]);
        assert!(child_directories(&base.join("a/c")).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let root = tree("txt");
        let err = child_directories(&root.path().join("nope")).unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }));
    }

    #[test]
    fn next_directory_walks_pre_order() {
        let root = tree("txt");
        let base = root.path();
        let next = |p: &str| rel(base, &next_directory(&base.join(p)).unwrap());
        assert_eq!(next("a"), "a/a");
        assert_eq!(next("a/b"), "a/c");
        assert_eq!(next("a/c"), "b");
    }

    #[test]
    fn prev_directory_walks_pre_order_backwards() {
        let root = tree("txt");
        let base = root.path();
        let prev = |p: &str| rel(base, &prev_directory(&base.join(p)).unwrap());
        assert_eq!(prev("a/a"), "a");
        assert_eq!(prev("a/c"), "a/b");
        assert_eq!(prev("b"), "a/c");
        assert_eq!(prev("c"), "b/c");
    }
}

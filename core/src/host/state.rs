use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::Level;

use super::paths::{self, child_files};
use crate::errors::ViewerError;
use crate::logging::log_failure;

/// Image list of the directory being viewed plus a cursor into it.
#[derive(Debug, Default)]
pub struct ViewerState {
    paths: Vec<PathBuf>,
    cursor: usize,
    extensions: HashSet<String>,
}

impl ViewerState {
    pub fn new(filename: impl AsRef<Path>, extensions: HashSet<String>) -> Self {
        let filename = match paths::absolute(filename.as_ref()) {
            Ok(path) => path,
            Err(err) => {
                log_failure(Level::Warn, "peek.host", "keeping relative path", &err);
                filename.as_ref().to_path_buf()
            }
        };
        log::debug!(target: "peek.host", "Initialized state with {:?}", filename);
        log::info!(target: "peek.host", "Available extensions: {:?}", extensions);

        Self {
            paths: vec![filename],
            cursor: 0,
            extensions,
        }
    }

    /// List the opened file's directory. The cursor lands on the first entry
    /// that does not sort before the opened file. A directory without images
    /// falls back to the previous directory that has some.
    pub fn reload_files(&mut self) -> Result<(), ViewerError> {
        let current = self.current()?;
        let parent = current
            .parent()
            .ok_or_else(|| ViewerError::NoParent(current.clone()))?;
        let paths = child_files(parent, &self.extensions)?;
        if paths.is_empty() {
            return self.prev_directory();
        }

        self.cursor = paths
            .iter()
            .position(|path| path.as_path() >= current.as_path())
            .unwrap_or(0);
        self.paths = paths;
        log::debug!(
            target: "peek.host",
            "File list updated ({} files, cursor = {})",
            self.paths.len(),
            self.cursor
        );
        Ok(())
    }

    pub fn current(&self) -> Result<PathBuf, ViewerError> {
        self.paths
            .get(self.cursor)
            .cloned()
            .ok_or(ViewerError::EmptyBuffer)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn parent_dir(&self) -> Result<PathBuf, ViewerError> {
        let current = self.current()?;
        current
            .parent()
            .map(Path::to_path_buf)
            .ok_or(ViewerError::NoParent(current))
    }

    fn change_directory<F>(&mut self, step: F) -> Result<(), ViewerError>
    where
        F: Fn(&Path) -> Option<PathBuf>,
    {
        let start = self.parent_dir()?;
        let mut current = start.clone();
        loop {
            log::debug!(target: "peek.host", "Changing directory (current target: {:?})", current);
            current = step(&current).ok_or_else(|| ViewerError::NoDirectory(start.clone()))?;
            let paths = child_files(&current, &self.extensions)?;
            if !paths.is_empty() {
                self.paths = paths;
                return Ok(());
            }
        }
    }

    /// Move to the next directory holding images, on its first image.
    pub fn next_directory(&mut self) -> Result<(), ViewerError> {
        self.change_directory(paths::next_directory)?;
        self.move_first();
        Ok(())
    }

    /// Move to the previous directory holding images, on its last image.
    pub fn prev_directory(&mut self) -> Result<(), ViewerError> {
        self.change_directory(paths::prev_directory)?;
        self.move_last();
        Ok(())
    }

    pub fn next_cursor(&mut self) -> Result<(), ViewerError> {
        if self.cursor + 1 < self.paths.len() {
            self.cursor += 1;
            Ok(())
        } else {
            self.next_directory()
        }
    }

    pub fn prev_cursor(&mut self) -> Result<(), ViewerError> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Ok(())
        } else {
            self.prev_directory()
        }
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
    }

    pub fn move_last(&mut self) {
        self.cursor = self.paths.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::fixtures::{rel, tree};

    fn opened(root: &Path, file: &str) -> ViewerState {
        let mut state = ViewerState::new(root.join(file), HashSet::from([String::from("txt")]));
        state.reload_files().unwrap();
        state
    }

    fn current(root: &Path, state: &ViewerState) -> String {
        rel(root, &state.current().unwrap())
    }

    #[test]
    fn reload_places_cursor_on_opened_file() {
        let root = tree("txt");
        let base = root.path();

        let state = opened(base, "a/b/a.txt");
        assert_eq!(state.cursor(), 0);
        let listed: Vec<_> = state.paths().iter().map(|p| rel(base, p)).collect();
        assert_eq!(listed, vec!["a/b/a.txt", "a/b/b.txt", "a/b/c.txt"]);

        let state = opened(base, "a/b/b.txt");
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn reload_of_missing_file_lands_on_next_sibling() {
        let root = tree("txt");
        let state = opened(root.path(), "a/b/ab.txt");
        assert_eq!(current(root.path(), &state), "a/b/b.txt");
    }

    #[test]
    fn relative_filename_is_resolved_against_working_directory() {
        let root = tree("txt");
        let base = root.path().canonicalize().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(base.join("a/b")).unwrap();

        let mut state = ViewerState::new("b.txt", HashSet::from([String::from("txt")]));
        let reloaded = state.reload_files();
        let prev = state.prev_directory();
        std::env::set_current_dir(previous).unwrap();

        reloaded.unwrap();
        assert_eq!(state.cursor(), 1);
        prev.unwrap();
        assert_eq!(current(&base, &state), "a/a/c.txt");
    }

    #[test]
    fn empty_state_reports_empty_buffer() {
        let state = ViewerState::default();
        assert!(matches!(state.current(), Err(ViewerError::EmptyBuffer)));
    }

    #[test]
    fn change_directory_both_ways() {
        let root = tree("txt");
        let base = root.path();
        let mut state = opened(base, "a/b/a.txt");

        state.prev_directory().unwrap();
        assert_eq!(current(base, &state), "a/a/c.txt");
        assert_eq!(state.paths().len(), 3);

        state.next_directory().unwrap();
        assert_eq!(current(base, &state), "a/b/a.txt");
    }

    #[test]
    fn next_cursor_crosses_into_following_directories() {
        let root = tree("txt");
        let base = root.path();
        let mut state = opened(base, "a/a/b.txt");

        state.next_cursor().unwrap();
        assert_eq!(current(base, &state), "a/a/c.txt");
        state.next_cursor().unwrap();
        assert_eq!(current(base, &state), "a/b/a.txt");
        state.next_cursor().unwrap(); // a/b/b
        state.next_cursor().unwrap(); // a/b/c
        state.next_cursor().unwrap(); // b/a/a, skipping empty a/c and b
        assert_eq!(current(base, &state), "b/a/a.txt");
    }

    #[test]
    fn prev_cursor_crosses_into_preceding_directories() {
        let root = tree("txt");
        let base = root.path();
        let mut state = opened(base, "b/a/a.txt");

        state.prev_cursor().unwrap();
        assert_eq!(current(base, &state), "a/b/c.txt");
        state.prev_cursor().unwrap();
        assert_eq!(current(base, &state), "a/b/b.txt");
        for _ in 0..4 {
            state.prev_cursor().unwrap(); // a/b/a, a/a/c, a/a/b, a/a/a
        }
        state.prev_cursor().unwrap();
        assert_eq!(current(base, &state), "a/d.txt");
    }

    #[test]
    fn move_first_and_last() {
        let root = tree("txt");
        let base = root.path();
        for file in ["a/a/a.txt", "a/a/b.txt", "a/a/c.txt"] {
            let mut state = opened(base, file);
            state.move_first();
            assert_eq!(current(base, &state), "a/a/a.txt");
            state.move_last();
            assert_eq!(current(base, &state), "a/a/c.txt");
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer state machine.
//!
//! Pure reducer over [`Action`]s; the Iced layer maps service results onto
//! actions and renders whatever [`ViewerState`] says. Failures are kept as
//! [`Error`] values and localized at render time, so a language switch also
//! re-translates a visible error.

use crate::directory_scanner::ImageList;
use crate::error::Error;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Selecting,
    Loading,
    Viewing,
    Error,
}

#[derive(Debug, Clone)]
pub enum Action {
    SelectDirectory,
    CancelSelection,
    DirectorySelected(PathBuf),
    ImagesLoaded(ImageList),
    LoadFailed(Error),
    NextImage,
    PrevImage,
    ClearError,
}

#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    status: Status,
    directory: Option<PathBuf>,
    images: Vec<PathBuf>,
    current_index: usize,
    error: Option<Error>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectDirectory => {
                self.status = Status::Selecting;
                self.error = None;
            }
            Action::CancelSelection => self.status = Status::Idle,
            Action::DirectorySelected(path) => {
                self.status = Status::Loading;
                self.error = None;
                self.directory = Some(path);
                self.images.clear();
                self.current_index = 0;
            }
            Action::ImagesLoaded(list) => {
                self.status = Status::Viewing;
                self.images = list.into_iter().collect();
                self.current_index = 0;
            }
            Action::LoadFailed(error) => {
                self.status = Status::Error;
                self.error = Some(error);
            }
            Action::NextImage => {
                if self.status == Status::Viewing && !self.is_at_last() {
                    self.current_index += 1;
                }
            }
            Action::PrevImage => {
                if self.status == Status::Viewing && !self.is_at_first() {
                    self.current_index -= 1;
                }
            }
            // Only leaves the error screen; other statuses are untouched
            Action::ClearError => {
                if self.status == Status::Error {
                    self.status = Status::Idle;
                    self.error = None;
                }
            }
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Image to display, only while viewing.
    pub fn current_image(&self) -> Option<&Path> {
        if self.status != Status::Viewing {
            return None;
        }
        self.images.get(self.current_index).map(PathBuf::as_path)
    }

    /// The failure being shown, only while in [`Status::Error`].
    pub fn error(&self) -> Option<&Error> {
        if self.status != Status::Error {
            return None;
        }
        self.error.as_ref()
    }

    pub fn is_at_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.current_index + 1 >= self.images.len()
    }

    /// A new selection can start from any status but the in-flight ones.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, Status::Selecting | Status::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory_scanner::list_images;
    use crate::media::SupportedExtensions;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn scanned(names: &[&str]) -> (TempDir, ImageList) {
        let dir = tempdir().expect("failed to create temp dir");
        for name in names {
            fs::write(dir.path().join(name), b"fake").expect("failed to write file");
        }
        let list = list_images(
            dir.path().to_str().expect("utf-8 temp dir"),
            &SupportedExtensions::default(),
        )
        .expect("failed to scan directory");
        (dir, list)
    }

    fn viewing(names: &[&str]) -> (TempDir, ViewerState) {
        let (dir, list) = scanned(names);
        let mut state = ViewerState::new();
        state.apply(Action::SelectDirectory);
        state.apply(Action::DirectorySelected(dir.path().to_path_buf()));
        state.apply(Action::ImagesLoaded(list));
        (dir, state)
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ViewerState::new();
        assert_eq!(state.status(), Status::Idle);
        assert!(state.images().is_empty());
        assert!(state.current_image().is_none());
        assert!(state.directory().is_none());
    }

    #[test]
    fn select_then_cancel_returns_to_idle() {
        let mut state = ViewerState::new();
        state.apply(Action::SelectDirectory);
        assert_eq!(state.status(), Status::Selecting);
        assert!(state.is_busy());

        state.apply(Action::CancelSelection);
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn directory_selected_clears_previous_images() {
        let (_dir, mut state) = viewing(&["a.png", "b.png"]);
        state.apply(Action::NextImage);

        state.apply(Action::SelectDirectory);
        state.apply(Action::DirectorySelected(PathBuf::from("/elsewhere")));

        assert_eq!(state.status(), Status::Loading);
        assert!(state.images().is_empty());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.directory(), Some(Path::new("/elsewhere")));
    }

    #[test]
    fn images_loaded_enters_viewing_at_first_image() {
        let (_dir, state) = viewing(&["a.png", "b.jpg", "c.gif"]);
        assert_eq!(state.status(), Status::Viewing);
        assert_eq!(state.images().len(), 3);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.current_image(), state.images().first().map(PathBuf::as_path));
    }

    #[test]
    fn navigation_is_clamped_to_bounds() {
        let (_dir, mut state) = viewing(&["a.png", "b.png"]);

        state.apply(Action::PrevImage);
        assert_eq!(state.current_index(), 0);

        state.apply(Action::NextImage);
        assert_eq!(state.current_index(), 1);
        assert!(state.is_at_last());

        state.apply(Action::NextImage);
        assert_eq!(state.current_index(), 1);

        state.apply(Action::PrevImage);
        assert_eq!(state.current_index(), 0);
        assert!(state.is_at_first());
    }

    #[test]
    fn single_image_is_both_first_and_last() {
        let (_dir, mut state) = viewing(&["only.png"]);
        assert!(state.is_at_first());
        assert!(state.is_at_last());
        state.apply(Action::NextImage);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn navigation_is_ignored_outside_viewing() {
        let mut state = ViewerState::new();
        state.apply(Action::NextImage);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn load_failure_then_clear_error() {
        let mut state = ViewerState::new();
        state.apply(Action::SelectDirectory);
        state.apply(Action::LoadFailed(Error::NotInitialized));
        assert_eq!(state.status(), Status::Error);
        assert!(matches!(state.error(), Some(Error::NotInitialized)));
        assert!(!state.is_busy());

        state.apply(Action::ClearError);
        assert_eq!(state.status(), Status::Idle);
        assert!(state.error().is_none());
    }

    #[test]
    fn clear_error_keeps_viewing_session() {
        let (_dir, mut state) = viewing(&["a.png", "b.png"]);
        state.apply(Action::NextImage);

        state.apply(Action::ClearError);

        assert_eq!(state.status(), Status::Viewing);
        assert_eq!(state.current_index(), 1);
        assert!(state.current_image().is_some());
    }

    #[test]
    fn new_selection_after_failure_drops_old_error() {
        let mut state = ViewerState::new();
        state.apply(Action::SelectDirectory);
        state.apply(Action::LoadFailed(Error::NoImagesFound(PathBuf::from("/empty"))));

        let (dir, list) = scanned(&["a.png"]);
        state.apply(Action::SelectDirectory);
        assert!(state.error().is_none());
        state.apply(Action::DirectorySelected(dir.path().to_path_buf()));
        state.apply(Action::ImagesLoaded(list));

        assert_eq!(state.status(), Status::Viewing);
        assert!(state.error().is_none());
    }

    #[test]
    fn opening_directory_after_failure_drops_old_error() {
        let mut state = ViewerState::new();
        state.apply(Action::LoadFailed(Error::NotInitialized));

        state.apply(Action::DirectorySelected(PathBuf::from("/photos")));

        assert_eq!(state.status(), Status::Loading);
        assert!(state.error().is_none());
    }
}

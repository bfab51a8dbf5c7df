// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding image files.
//!
//! Scans the immediate entries of one directory (subdirectories are skipped,
//! never descended into) and keeps the files whose extension is in the
//! supported set. Results are sorted by file name so that navigation order
//! does not depend on the filesystem's enumeration order.

use crate::error::{Error, Result};
use crate::media::SupportedExtensions;
use std::fs;
use std::path::{Path, PathBuf};

/// Non-empty list of image files found in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList {
    directory: PathBuf,
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// The directory the list was built from, as given by the caller.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Returns the total number of image files in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Always `false` for lists returned by [`list_images`].
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }

    /// Returns the first image file in the list, if any.
    pub fn first(&self) -> Option<&Path> {
        self.get(0)
    }

    /// Iterates over the image paths in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.image_files.iter().map(|p| p.as_path())
    }

    /// Returns all image paths as a slice.
    pub fn paths(&self) -> &[PathBuf] {
        &self.image_files
    }

    /// Converts the paths into display strings for the bound call surface.
    pub fn into_strings(self) -> Vec<String> {
        self.image_files
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }
}

impl IntoIterator for ImageList {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.image_files.into_iter()
    }
}

/// Lists the supported image files directly inside `directory`.
///
/// An empty result is reported as [`Error::NoImagesFound`] rather than as an
/// empty list, so callers always get at least one path on success.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `directory` is empty (the filesystem is not
///   touched)
/// - [`Error::AccessError`] if the path cannot be stat'ed
/// - [`Error::NotADirectory`] if the path is not a directory
/// - [`Error::ReadError`] if the entries cannot be enumerated
/// - [`Error::NoImagesFound`] if no entry matched
pub fn list_images(
    directory: impl AsRef<Path>,
    extensions: &SupportedExtensions,
) -> Result<ImageList> {
    let directory = directory.as_ref();
    if directory.as_os_str().is_empty() {
        return Err(Error::InvalidArgument);
    }

    let directory = directory.to_path_buf();
    let metadata = fs::metadata(&directory).map_err(|e| Error::access(&directory, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(directory));
    }

    let mut image_files = Vec::new();

    for entry in fs::read_dir(&directory).map_err(|e| Error::read(&directory, e))? {
        let entry = entry.map_err(|e| Error::read(&directory, e))?;
        let file_type = entry.file_type().map_err(|e| Error::read(&directory, e))?;

        // Subdirectories are skipped, not recursed into
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if extensions.matches(&path) {
            image_files.push(path);
        }
    }

    if image_files.is_empty() {
        return Err(Error::NoImagesFound(directory));
    }

    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(ImageList {
        directory,
        image_files,
    })
}

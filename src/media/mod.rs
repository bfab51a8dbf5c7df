// SPDX-License-Identifier: MPL-2.0
//! Supported image formats.
//!
//! The allow-list is fixed at compile time; [`SupportedExtensions`] turns it
//! into an immutable lookup set owned by the service.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

/// Supported media extensions
pub mod extensions {
    /// Image file extensions, lowercase and without the leading dot.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
}

pub use extensions::IMAGE_EXTENSIONS;

/// Immutable, case-insensitive set of recognized image extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedExtensions {
    set: HashSet<&'static str>,
}

impl SupportedExtensions {
    /// Builds the set from a list of lowercase extensions. A leading dot is
    /// accepted and stripped.
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            set: extensions
                .iter()
                .map(|&ext| ext.strip_prefix('.').unwrap_or(ext))
                .collect(),
        }
    }

    /// Checks an extension, without its leading dot, for membership,
    /// ignoring case.
    pub fn contains(&self, extension: &OsStr) -> bool {
        extension
            .to_str()
            .map(|ext| self.set.contains(ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Checks whether the file name of `path` carries a supported extension.
    ///
    /// The extension is whatever follows the last `.` of the file name, so a
    /// bare `.png` counts as a PNG file.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(OsStr::to_str)
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| self.contains(OsStr::new(ext)))
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl Default for SupportedExtensions {
    fn default() -> Self {
        Self::new(IMAGE_EXTENSIONS)
    }
}

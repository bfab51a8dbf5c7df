// SPDX-License-Identifier: MPL-2.0
//! The bound service exposed to the GUI shell.
//!
//! [`ImageViewerService`] offers the two operations the front end calls:
//! picking a directory through the host and listing the images inside it.
//! Both are stateless; the only shared piece is the host context, which is
//! written once at startup and read afterwards.

use crate::directory_scanner::{self, ImageList};
use crate::error::{Error, Result};
use crate::host::HostContext;
use crate::media::SupportedExtensions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Title shown on the folder dialog when none is configured.
pub const DEFAULT_DIALOG_TITLE: &str = "Select an image folder";

#[derive(Debug)]
pub struct ImageViewerService {
    host: OnceLock<Arc<dyn HostContext>>,
    extensions: SupportedExtensions,
    dialog_title: String,
}

impl Default for ImageViewerService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageViewerService {
    /// Creates a service without a host. [`select_directory`](Self::select_directory)
    /// fails with [`Error::NotInitialized`] until [`on_startup`](Self::on_startup)
    /// is called; listing works right away.
    pub fn new() -> Self {
        Self {
            host: OnceLock::new(),
            extensions: SupportedExtensions::default(),
            dialog_title: DEFAULT_DIALOG_TITLE.to_string(),
        }
    }

    /// Creates a service bound to `host` from the start.
    pub fn with_host(host: Arc<dyn HostContext>) -> Self {
        let service = Self::new();
        let _ = service.host.set(host);
        service
    }

    pub fn with_dialog_title(mut self, title: impl Into<String>) -> Self {
        self.dialog_title = title.into();
        self
    }

    pub fn with_extensions(mut self, extensions: SupportedExtensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Attaches the host context. Returns `false` (and keeps the existing
    /// host) if one was already attached.
    pub fn on_startup(&self, host: Arc<dyn HostContext>) -> bool {
        let attached = self.host.set(host).is_ok();
        if !attached {
            tracing::warn!("host context already initialized, ignoring new one");
        }
        attached
    }

    pub fn is_initialized(&self) -> bool {
        self.host.get().is_some()
    }

    pub fn extensions(&self) -> &SupportedExtensions {
        &self.extensions
    }

    /// Shows the host's folder dialog and returns the chosen directory.
    ///
    /// # Errors
    ///
    /// - [`Error::NotInitialized`] if no host context is attached
    /// - [`Error::NoSelection`] if the user cancelled
    /// - [`Error::DialogError`] if the host dialog failed
    pub async fn select_directory(&self) -> Result<PathBuf> {
        let host = self.host.get().ok_or(Error::NotInitialized)?;

        tracing::debug!(title = %self.dialog_title, "opening directory dialog");
        let picked = host
            .pick_directory(&self.dialog_title)
            .await
            .map_err(|cause| {
                tracing::warn!(error = %cause, "directory dialog failed");
                Error::DialogError(cause)
            })?;

        match picked {
            Some(path) if !path.as_os_str().is_empty() => {
                tracing::info!(path = %path.display(), "directory selected");
                Ok(path)
            }
            _ => {
                tracing::debug!("directory selection cancelled");
                Err(Error::NoSelection)
            }
        }
    }

    /// Lists the supported images directly inside `directory`.
    ///
    /// Note that a directory without any supported image is an error
    /// ([`Error::NoImagesFound`]), not an empty list.
    pub fn list_images(&self, directory: impl AsRef<Path>) -> Result<ImageList> {
        let directory = directory.as_ref();
        tracing::debug!(directory = %directory.display(), "scanning directory for images");
        match directory_scanner::list_images(directory, &self.extensions) {
            Ok(list) => {
                tracing::info!(
                    directory = %directory.display(),
                    count = list.len(),
                    "images listed"
                );
                Ok(list)
            }
            Err(err) => {
                tracing::warn!(directory = %directory.display(), error = %err, "image listing failed");
                Err(err)
            }
        }
    }

    /// String form of [`list_images`](Self::list_images) for the bound call
    /// surface.
    pub fn get_image_files(&self, directory: &str) -> Result<Vec<String>> {
        self.list_images(directory).map(ImageList::into_strings)
    }
}

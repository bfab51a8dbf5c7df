// SPDX-License-Identifier: MPL-2.0
//! Bridge to the running GUI host.
//!
//! [`HostContext`] is the opaque handle the service uses to reach native
//! dialogs. The desktop build uses [`RfdHost`]; tests plug in their own
//! implementation.

use crate::error::HostCause;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::path::PathBuf;

/// Outcome of a host folder dialog: `Ok(None)` when the user cancelled.
pub type DialogResult = Result<Option<PathBuf>, HostCause>;

/// Handle to the GUI host, established once at application startup.
pub trait HostContext: Send + Sync + fmt::Debug {
    /// Shows the native "choose a folder" dialog and resolves once the user
    /// answers. There is no timeout.
    fn pick_directory(&self, title: &str) -> BoxFuture<'static, DialogResult>;
}

/// Native dialogs through `rfd`, parented to nothing (the Iced window does not
/// expose a raw handle to us).
#[derive(Debug, Clone, Default)]
pub struct RfdHost {
    start_directory: Option<PathBuf>,
}

impl RfdHost {
    /// Opens dialogs in `directory` when it still exists.
    pub fn with_start_directory(directory: Option<PathBuf>) -> Self {
        Self {
            start_directory: directory,
        }
    }
}

impl HostContext for RfdHost {
    fn pick_directory(&self, title: &str) -> BoxFuture<'static, DialogResult> {
        let title = title.to_owned();
        let start_directory = self.start_directory.clone();

        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title(title);

            if let Some(dir) = start_directory {
                if dir.is_dir() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            let picked = dialog.pick_folder().await;
            Ok(picked.map(|handle| handle.path().to_path_buf()))
        }
        .boxed()
    }
}

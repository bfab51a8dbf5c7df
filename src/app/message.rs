// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::directory_scanner::ImageList;
use crate::error::Error;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "Select folder" button was pressed.
    SelectFolder,
    /// Result from the host folder dialog.
    DirectorySelected(Result<PathBuf, Error>),
    /// Result from listing the chosen directory.
    ImagesListed(Result<ImageList, Error>),
    NextImage,
    PreviousImage,
    DismissError,
    /// A locale tag was picked in the toolbar.
    LanguageSelected(String),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory to list on startup, skipping the dialog.
    pub directory: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

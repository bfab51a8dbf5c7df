// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Smallest window the layout still works in.
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Largest window size accepted from the settings file.
pub const MAX_WINDOW_WIDTH: u32 = 7680;
pub const MAX_WINDOW_HEIGHT: u32 = 4320;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor the OS provide a usable one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_WIDTH <= MAX_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(DEFAULT_WINDOW_HEIGHT <= MAX_WINDOW_HEIGHT);
};

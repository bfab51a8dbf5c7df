// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a small image folder viewer built with the Iced GUI framework.
//!
//! The backend is [`service::ImageViewerService`]: it asks the host for a
//! directory and lists the JPEG, PNG and GIF files directly inside it. The
//! [`app`] module is the Iced front end driving those two calls.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod host;
pub mod i18n;
pub mod media;
pub mod service;

// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::state::Action;
use super::{build_service, App, Message};
use crate::config;
use crate::error::Error;
use iced::Task;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SelectFolder => {
            if app.state.is_busy() {
                return Task::none();
            }
            app.state.apply(Action::SelectDirectory);
            let service = Arc::clone(&app.service);
            Task::perform(
                async move { service.select_directory().await },
                Message::DirectorySelected,
            )
        }
        Message::DirectorySelected(Ok(path)) => app.open_directory(path),
        Message::DirectorySelected(Err(Error::NoSelection)) => {
            app.state.apply(Action::CancelSelection);
            Task::none()
        }
        Message::DirectorySelected(Err(error)) | Message::ImagesListed(Err(error)) => {
            tracing::debug!(error = %error, "viewer load failed");
            app.state.apply(Action::LoadFailed(error));
            Task::none()
        }
        Message::ImagesListed(Ok(list)) => {
            app.state.apply(Action::ImagesLoaded(list));
            Task::none()
        }
        Message::NextImage => {
            app.state.apply(Action::NextImage);
            Task::none()
        }
        Message::PreviousImage => {
            app.state.apply(Action::PrevImage);
            Task::none()
        }
        Message::DismissError => {
            app.state.apply(Action::ClearError);
            app.notice = None;
            Task::none()
        }
        Message::LanguageSelected(tag) => {
            handle_language_selected(app, &tag);
            Task::none()
        }
    }
}

impl App {
    /// Moves to the loading state and lists `directory` off the UI thread.
    pub(super) fn open_directory(&mut self, directory: PathBuf) -> Task<Message> {
        self.state.apply(Action::DirectorySelected(directory.clone()));
        let service = Arc::clone(&self.service);
        Task::perform(
            async move {
                let scan_dir = directory.clone();
                tokio::task::spawn_blocking(move || service.list_images(&scan_dir))
                    .await
                    .unwrap_or_else(|join_error| {
                        Err(Error::read(directory, io::Error::other(join_error)))
                    })
            },
            Message::ImagesListed,
        )
    }
}

fn handle_language_selected(app: &mut App, tag: &str) {
    let Ok(locale) = tag.parse::<LanguageIdentifier>() else {
        return;
    };
    app.i18n.set_locale(locale);
    if app.i18n.current_locale().to_string() != tag {
        return;
    }

    // Dialog title follows the UI language
    app.service = build_service(&app.i18n, Arc::clone(&app.host));

    app.config.general.language = Some(tag.to_string());
    if let Err(err) = config::save(&app.config) {
        tracing::warn!(error = %err, "failed to persist language choice");
    }
}

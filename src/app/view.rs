// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: a toolbar (folder button, current directory, language picker), an
//! optional error banner, and a body that depends on the viewer status.

use super::state::{Status, ViewerState};
use super::Message;
use crate::i18n::fluent::I18n;
use iced::widget::{button, image, pick_list, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};

const SPACING: f32 = 8.0;
const PADDING: f32 = 12.0;
const TITLE_SIZE: f32 = 24.0;
const CAPTION_SIZE: f32 = 13.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a ViewerState,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(SPACING)
        .padding(PADDING)
        .push(toolbar(ctx.i18n, ctx.state));

    if let Some(notice) = ctx.notice {
        column = column.push(banner(ctx.i18n, notice.to_string()));
    }

    if let Some(error) = ctx.state.error() {
        let detail = ctx.i18n.error_message(error);
        let message = ctx
            .i18n
            .tr_with_args("error-banner-prefix", &[("message", detail.as_str())]);
        column = column.push(banner(ctx.i18n, message));
    }

    let body: Element<'_, Message> = match ctx.state.status() {
        Status::Viewing => viewer(ctx.i18n, ctx.state),
        Status::Selecting => status_line(ctx.i18n.tr("status-selecting")),
        Status::Loading => status_line(ctx.i18n.tr("status-loading")),
        Status::Idle | Status::Error => empty_state(ctx.i18n),
    };

    Container::new(column.push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar<'a>(i18n: &'a I18n, state: &'a ViewerState) -> Element<'a, Message> {
    let select = button(text(i18n.tr("toolbar-select-folder")))
        .on_press_maybe((!state.is_busy()).then_some(Message::SelectFolder));

    let directory = state
        .directory()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| i18n.tr("toolbar-no-folder"));

    let locales: Vec<String> = i18n
        .available_locales
        .iter()
        .map(ToString::to_string)
        .collect();
    let languages = pick_list(
        locales,
        Some(i18n.current_locale().to_string()),
        Message::LanguageSelected,
    )
    .placeholder(i18n.tr("toolbar-language"));

    Row::new()
        .spacing(SPACING)
        .align_y(alignment::Vertical::Center)
        .push(select)
        .push(Container::new(text(directory).size(CAPTION_SIZE)).width(Length::Fill))
        .push(languages)
        .into()
}

fn banner<'a>(i18n: &I18n, message: String) -> Element<'a, Message> {
    Row::new()
        .spacing(SPACING)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(text(message)).width(Length::Fill))
        .push(button(text(i18n.tr("error-dismiss"))).on_press(Message::DismissError))
        .into()
}

fn viewer<'a>(i18n: &'a I18n, state: &'a ViewerState) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match state.current_image() {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("").into(),
    };

    let current = (state.current_index() + 1).to_string();
    let total = state.images().len().to_string();
    let position = text(i18n.tr_with_args(
        "viewer-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ));

    let previous = button(text(i18n.tr("viewer-previous")))
        .on_press_maybe((!state.is_at_first()).then_some(Message::PreviousImage));
    let next = button(text(i18n.tr("viewer-next")))
        .on_press_maybe((!state.is_at_last()).then_some(Message::NextImage));

    let controls = Row::new()
        .spacing(SPACING)
        .align_y(alignment::Vertical::Center)
        .push(previous)
        .push(position)
        .push(next);

    Column::new()
        .spacing(SPACING)
        .align_x(alignment::Horizontal::Center)
        .push(Container::new(picture).center(Length::Fill))
        .push(controls)
        .push(text(i18n.tr("viewer-hint")).size(CAPTION_SIZE))
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(SPACING * 2.0)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("empty-state-title")).size(TITLE_SIZE))
        .push(text(i18n.tr("empty-state-subtitle")))
        .push(
            button(text(i18n.tr("toolbar-select-folder")))
                .padding([SPACING, SPACING * 3.0])
                .on_press(Message::SelectFolder),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn status_line<'a>(message: String) -> Element<'a, Message> {
    Container::new(text(message))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

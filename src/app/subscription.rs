// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Keyboard navigation: Left/Right browse the images, Escape dismisses an
/// error. Keys already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_message(&key),
            _ => None,
        }
    })
}

fn key_message(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousImage),
        Key::Named(Named::ArrowRight) => Some(Message::NextImage),
        Key::Named(Named::Escape) => Some(Message::DismissError),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_navigation() {
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowLeft)),
            Some(Message::PreviousImage)
        ));
        assert!(matches!(
            key_message(&Key::Named(Named::ArrowRight)),
            Some(Message::NextImage)
        ));
        assert!(matches!(
            key_message(&Key::Named(Named::Escape)),
            Some(Message::DismissError)
        ));
        assert!(key_message(&Key::Named(Named::Enter)).is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes window resizes to the page and maps keyboard shortcuts:
//! Alt+Left/Alt+Right walk the history, plain Left/Right step the selector.

use super::Message;
use crate::domain::selector::{ArrowSide, SelectorInput};
use crate::ui::navbar;
use crate::ui::portfolio;
use crate::ui::selector;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        // Keys typed into the location field are captured there.
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            map_key(&key, modifiers)
        }
        _ => None,
    })
}

fn map_key(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    let Key::Named(named) = key else {
        return None;
    };

    match (named, modifiers.alt()) {
        (Named::ArrowLeft, true) => Some(Message::Navbar(navbar::Message::Back)),
        (Named::ArrowRight, true) => Some(Message::Navbar(navbar::Message::Forward)),
        (Named::ArrowLeft, false) => Some(arrow(ArrowSide::Left)),
        (Named::ArrowRight, false) => Some(arrow(ArrowSide::Right)),
        _ => None,
    }
}

fn arrow(side: ArrowSide) -> Message {
    Message::Portfolio(portfolio::Message::Selector(selector::Message::Input(
        SelectorInput::Arrow(side),
    )))
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_arrows_walk_history() {
        let message = map_key(&Key::Named(Named::ArrowLeft), keyboard::Modifiers::ALT);
        assert!(matches!(
            message,
            Some(Message::Navbar(navbar::Message::Back))
        ));
    }

    #[test]
    fn plain_arrows_step_selector() {
        let message = map_key(&Key::Named(Named::ArrowRight), keyboard::Modifiers::empty());
        assert!(matches!(
            message,
            Some(Message::Portfolio(portfolio::Message::Selector(
                selector::Message::Input(SelectorInput::Arrow(ArrowSide::Right))
            )))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(map_key(&Key::Named(Named::Enter), keyboard::Modifiers::empty()).is_none());
        assert!(map_key(&Key::Character("a".into()), keyboard::Modifiers::empty()).is_none());
    }
}

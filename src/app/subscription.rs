// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The global keyboard shortcut and the widget's timers are both modeled as
//! subscriptions: they are acquired while the app polls them and released
//! with it, so neither a key listener nor a pending timer can outlive the
//! widget.

use super::Message;
use crate::ui::feedback;
use iced::{event, Subscription};

/// Listens for raw window events and routes keyboard input to the widget.
///
/// Only events no focused widget claimed are forwarded, so typing `f` into
/// the feedback text area edits the draft instead of toggling the panel.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Keyboard(..) = &event {
            match status {
                event::Status::Ignored => Some(Message::Feedback(feedback::Message::RawEvent {
                    window: window_id,
                    event,
                })),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}

/// Forwards the widget's own timer subscriptions (countdowns, burst frames).
pub fn create_widget_subscription(feedback: &feedback::State) -> Subscription<Message> {
    feedback.subscription().map(Message::Feedback)
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The widget's surfaces are stacked as independent layers: the one-time
//! announcement, the bottom-right corner (panel + toggle button), the
//! success banner, and the confetti canvas on top. Layers that are not
//! active are simply not pushed.

use super::Message;
use crate::ui::feedback;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub feedback: &'a feedback::State,
}

/// Renders the full window as a stack of widget layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    if let Some(announcement) = ctx.feedback.view_announcement() {
        stack = stack.push(announcement.map(Message::Feedback));
    }

    stack = stack.push(ctx.feedback.view().map(Message::Feedback));

    if let Some(banner) = ctx.feedback.view_banner() {
        stack = stack.push(banner.map(Message::Feedback));
    }

    // Topmost layer; the canvas never handles events, so clicks fall
    // through to the panel while confetti is still raining.
    if let Some(burst) = ctx.feedback.view_burst() {
        stack = stack.push(burst.map(Message::Feedback));
    }

    stack.into()
}

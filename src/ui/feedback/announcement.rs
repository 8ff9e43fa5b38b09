// SPDX-License-Identifier: MPL-2.0
//! One-time onboarding hint shown briefly after startup.

use crate::ui::design_tokens::{opacity, typography};
use crate::ui::feedback::Message;
use iced::font::Weight;
use iced::widget::{container, Row, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};

/// Renders the centered "Press F to toggle feedback" overlay.
///
/// Visibility (and the 7-second auto-hide) is the component's decision;
/// this module only draws the hint.
pub(super) fn view() -> Element<'static, Message> {
    let hint = Row::new()
        .push(Text::new("Press ").size(typography::BODY))
        .push(Text::new("F").size(typography::BODY).font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        }))
        .push(Text::new(" to toggle feedback").size(typography::BODY));

    container(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            text_color: Some(Color {
                a: opacity::OVERLAY_HOVER,
                ..theme.palette().text
            }),
            ..Default::default()
        })
        .into()
}

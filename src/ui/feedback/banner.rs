// SPDX-License-Identifier: MPL-2.0
//! Success banner shown at the top of the window after submit.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::feedback::Message;
use crate::ui::styles;
use iced::widget::{container, Text};
use iced::{alignment, Element, Length};

const BANNER_TEXT: &str = "Your feedback has been sent!";

/// Renders the top-centered confirmation banner.
pub(super) fn view() -> Element<'static, Message> {
    let card = container(
        container(Text::new(BANNER_TEXT).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(sizing::BANNER_WIDTH))
    .padding(spacing::SM)
    .style(styles::container::banner);

    container(card)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD)
        .into()
}

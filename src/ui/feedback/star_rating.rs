// SPDX-License-Identifier: MPL-2.0
//! Five-star rating row for the feedback form.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::feedback::Message;
use crate::ui::state::{Rating, STAR_COUNT};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::Element;

const FILLED_STAR: &str = "★";
const OUTLINE_STAR: &str = "☆";

/// Renders the star row; star `v` is filled iff `rating >= v`.
pub(super) fn view(rating: Rating) -> Element<'static, Message> {
    let mut stars = Row::new().spacing(spacing::XS);

    for star in 1..=STAR_COUNT {
        let filled = rating.fills(star);
        let glyph = if filled { FILLED_STAR } else { OUTLINE_STAR };

        stars = stars.push(
            button(Text::new(glyph).size(sizing::STAR))
                .padding(0.0)
                .style(styles::button::star(filled))
                .on_press(Message::StarClicked(star)),
        );
    }

    stars.into()
}

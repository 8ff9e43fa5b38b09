// SPDX-License-Identifier: MPL-2.0
//! Bottom-right corner layout: the collapsible form panel and the
//! floating toggle button.

use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::feedback::{component, star_rating, Message, State};
use crate::ui::styles;
use iced::widget::{button, container, text_editor, Column, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

const TITLE: &str = "Your Feedback";
const SUBTITLE: &str = "What's on your mind?";
const PLACEHOLDER: &str = "Tell us what you think...";
const RATING_PROMPT: &str = "How would you rate your experience?";
const SUBMIT_LABEL: &str = "Send Feedback";
const TOGGLE_GLYPH: &str = "💬";
const CLOSE_GLYPH: &str = "✕";

/// Renders the corner layer: the panel (when open) stacked above the
/// round toggle button, pinned to the bottom-right of the window.
pub(super) fn corner(state: &State) -> Element<'_, Message> {
    let toggle = button(
        container(Text::new(TOGGLE_GLYPH).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::TOGGLE_DIAMETER))
    .height(Length::Fixed(sizing::TOGGLE_DIAMETER))
    .padding(0.0)
    .style(styles::button::toggle)
    .on_press(Message::TogglePanel);

    let mut corner = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Right);

    if state.panel_open() {
        corner = corner.push(form(state));
    }
    corner = corner.push(toggle);

    container(corner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// The form surface: header, text area, rating row, submit button.
fn form(state: &State) -> Element<'_, Message> {
    let close = button(Text::new(CLOSE_GLYPH).size(typography::BODY))
        .padding(spacing::XXS)
        .style(styles::button::close)
        .on_press(Message::ClosePanel);

    let header = Row::new()
        .align_y(alignment::Vertical::Top)
        .push(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::XXS)
                .push(Text::new(TITLE).size(typography::TITLE_MD))
                .push(
                    Text::new(SUBTITLE)
                        .size(typography::CAPTION)
                        .style(secondary_text),
                ),
        )
        .push(close);

    let text_area = text_editor(state.draft())
        .placeholder(PLACEHOLDER)
        .on_action(Message::DraftEdited)
        .height(Length::Fixed(sizing::TEXT_AREA_HEIGHT));

    let rating_section = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(RATING_PROMPT)
                .size(typography::CAPTION)
                .style(secondary_text),
        )
        .push(star_rating::view(state.rating()));

    // The text area is a required field: without visible characters the
    // submit button carries no press handler and renders disabled.
    let submit = button(
        container(Text::new(SUBMIT_LABEL).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::button::primary)
    .on_press_maybe((!state.draft_is_empty()).then_some(Message::SubmitPressed));

    // The wrapping container's bounds anchor the confetti burst.
    let submit = container(submit)
        .id(component::submit_button_id())
        .width(Length::Fill);

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(text_area)
            .push(rating_section)
            .push(submit),
    )
    .width(Length::Fixed(sizing::PANEL_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

fn secondary_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(Color {
            a: opacity::OVERLAY_STRONG,
            ..theme.palette().text
        }),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface for the collapsible feedback panel.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so the panel stays readable in both light and dark
/// modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Filled success surface for the post-submit banner.
pub fn banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SUCCESS_500)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

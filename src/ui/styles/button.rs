// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border,
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::Accents;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (GitHub link on a card).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, card_shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: card_shadow,
        snap: true,
    }
}

/// Secondary action that adapts to the theme (design spec link, navbar).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak;

    match status {
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(base.color)),
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            text_color: palette.background.strong.text,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base.color)),
            text_color: base.text,
            border: Border {
                color: palette.background.strong.color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Text-only button used for inline links and the selector arrows.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let accents = Accents::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accents.muted_text
        },
        button::Status::Active => accents.brand,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

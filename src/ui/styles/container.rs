// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Full-screen navy gradient backdrop.
pub fn backdrop(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Radians(std::f32::consts::PI))
        .add_stop(0.0, palette::NAVY_900)
        .add_stop(1.0, palette::NAVY_600);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        ..Default::default()
    }
}

/// Faint surface panel over the backdrop (video pane, notice panel).
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::BORDER,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

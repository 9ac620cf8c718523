// SPDX-License-Identifier: MPL-2.0
//! Processing screen placeholder.
//!
//! The real analysis pipeline is an external subsystem; this pane only
//! shows that the hand-off happened and which clip was forwarded.

use crate::application::port::VideoRef;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text, Column, Container},
    Color, Element, Length,
};

/// Renders the processing placeholder for the forwarded clip.
pub fn view<'a, M: 'a>(video: &'a VideoRef) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            text("Analyzing your technique…")
                .size(typography::TITLE_LG)
                .color(palette::WHITE),
        )
        .push(text(video.display_name()).size(typography::BODY).color(Color {
            a: opacity::TEXT_MUTED,
            ..palette::WHITE
        }));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

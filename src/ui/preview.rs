// SPDX-License-Identifier: MPL-2.0
//! Preview screen view.
//!
//! Pure rendering over a [`PreviewState`] snapshot; every interaction is
//! surfaced as a [`Message`] for the parent application to forward to the
//! preview driver.

use crate::preview::state::{Phase, PreviewState};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Space},
    Color, Element, Length,
};

/// Messages emitted by the preview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AnalyzePressed,
    ReselectPressed,
    BackPressed,
    NoticeDismissed,
    SettingsPressed,
}

/// Renders the preview screen for the given state snapshot.
pub fn view(state: &PreviewState) -> Element<'_, Message> {
    let body: Element<'_, Message> = if state.permission_notice {
        permission_notice()
    } else {
        flow_content(state)
    };

    let layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header())
        .push(body);

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}

fn header<'a>() -> Element<'a, Message> {
    let back = button(text("←").size(sizing::ICON_MD))
        .style(styles::button::header)
        .padding(spacing::XS)
        .on_press(Message::BackPressed);

    let title = text("Preview Video")
        .size(typography::TITLE_LG)
        .color(palette::WHITE);

    Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(back)
        .push(
            Container::new(title)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        // Mirror the back button so the title stays centered.
        .push(Space::new().width(sizing::ICON_MD + 2.0 * spacing::XS))
        .into()
}

fn flow_content(state: &PreviewState) -> Element<'_, Message> {
    let inner: Element<'_, Message> = match state.phase {
        Phase::Selecting => muted_text("Opening your video library…").into(),
        Phase::Ready | Phase::Submitting => selected_clip(state),
        Phase::Empty | Phase::Cancelled | Phase::HandedOff => {
            muted_text("No video selected").into()
        }
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::LG)
        .into()
}

fn selected_clip(state: &PreviewState) -> Element<'_, Message> {
    let name = state
        .selected_video
        .as_ref()
        .map(|video| video.display_name())
        .unwrap_or_default();

    let pane = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text("▶").size(sizing::ICON_XXL).color(palette::WHITE))
            .push(muted_text(name)),
    )
    .width(Length::Fill)
    .height(sizing::PREVIEW_PANE_HEIGHT)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::surface);

    let analyze_label = if state.busy {
        "Analyzing…"
    } else {
        "Analyze Technique"
    };
    let mut analyze = button(text(analyze_label).size(typography::BODY))
        .style(styles::button::primary)
        .padding([spacing::SM, spacing::XL]);
    if !state.busy {
        analyze = analyze.on_press(Message::AnalyzePressed);
    }

    let reselect = button(text("Choose Different Video").size(typography::BODY))
        .style(styles::button::secondary)
        .padding([spacing::SM, spacing::XL])
        .on_press(Message::ReselectPressed);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(pane)
        .push(analyze)
        .push(reselect)
        .into()
}

fn permission_notice<'a>() -> Element<'a, Message> {
    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                text("Permission Required")
                    .size(typography::TITLE_MD)
                    .color(palette::WHITE),
            )
            .push(muted_text(
                "We need access to your videos to select a clip for analysis.",
            ))
            .push(
                Row::new()
                    .spacing(spacing::MD)
                    .push(
                        button(text("Cancel").size(typography::BODY))
                            .style(styles::button::secondary)
                            .padding([spacing::XS, spacing::LG])
                            .on_press(Message::NoticeDismissed),
                    )
                    .push(
                        button(text("Settings").size(typography::BODY))
                            .style(styles::button::primary)
                            .padding([spacing::XS, spacing::LG])
                            .on_press(Message::SettingsPressed),
                    ),
            ),
    )
    .max_width(sizing::NOTICE_MAX_WIDTH)
    .padding(spacing::LG)
    .style(styles::container::surface);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn muted_text(content: &str) -> iced::widget::Text<'_> {
    text(content).size(typography::BODY).color(Color {
        a: opacity::TEXT_MUTED,
        ..palette::WHITE
    })
}

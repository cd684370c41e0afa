//! Titled section panel.

use iced::widget::{column, container, text};
use iced::{Background, Border, Element, Length, Theme};

use crate::app::Message;
use crate::theme::{colors, font, spacing};

pub fn panel<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let body = column![
        text(title).size(font::MD).color(colors::TEXT_SECONDARY),
        content.into(),
    ]
    .spacing(spacing::SM);

    container(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::SURFACE)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}

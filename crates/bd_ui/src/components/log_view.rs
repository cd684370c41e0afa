//! Scrollable log view component with monospace font

use iced::widget::{container, scrollable, text};
use iced::{Background, Border, Element, Font, Length, Theme};

use crate::app::Message;
use crate::theme::{colors, font, spacing};

/// Read-only view of the discovery log.
///
/// With `autoscroll` the view stays pinned to the newest output.
pub fn log_view(content: &str, autoscroll: bool) -> Element<'_, Message> {
    let body = text(content)
        .font(Font::MONOSPACE)
        .size(font::NORMAL)
        .color(colors::TEXT_PRIMARY);

    let mut view = scrollable(container(body).padding(spacing::SM).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);
    if autoscroll {
        view = view.anchor_bottom();
    }

    container(view)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(colors::CARD)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}

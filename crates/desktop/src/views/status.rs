use iced::border::Border;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Background, Color, Element, Length, Theme};

use crate::app::Message;
use crate::theme::tertiary_color;
use crate::views::bold;

pub fn loading<'a>(theme: &Theme) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    container(
        column![
            text("Analyzing Audio\u{2026}").size(18).font(bold()),
            Space::new().height(6),
            text("Downloading video, extracting audio, and classifying dialect")
                .size(14)
                .color(tertiary),
        ]
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding([32, 24])
    .style(container::rounded_box)
    .into()
}

pub fn error_banner<'a>(message: &'a str, theme: &Theme) -> Element<'a, Message> {
    let danger = theme.extended_palette().danger.base.color;

    container(
        row![
            column![
                text("Classification Failed")
                    .size(15)
                    .font(bold())
                    .color(danger),
                text(message).size(14),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(text("Dismiss").size(13))
                .on_press(Message::DismissError)
                .style(button::text),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding([14, 16])
    .width(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.10, ..danger })),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: Color { a: 0.40, ..danger },
        },
        ..container::Style::default()
    })
    .into()
}

use iced::border::Border;
use iced::widget::{button, column, container, text, text_input};
use iced::{Background, Color, Element, Length, Theme};

use accentscope_core::session::Session;

use crate::app::Message;
use crate::theme::tertiary_color;
use crate::views::bold;

const PLACEHOLDER: &str = "https://example.com/video.mp4";
const HELPER_TEXT: &str = "Supports YouTube, Loom, direct video links, and more";

pub fn view<'a>(session: &'a Session, theme: &Theme) -> Element<'a, Message> {
    let field = session.url_field();
    let submitting = session.is_submitting();

    // No on_input while a request is in flight: the field stays read-only
    // until the attempt resolves.
    let mut input = text_input(PLACEHOLDER, field.value()).padding(12).size(16);
    if !submitting {
        input = input
            .on_input(Message::UrlEdited)
            .on_submit(Message::SubmitPressed);
    }

    let hint: Element<'a, Message> = match field.validity_error() {
        Some(error) => text(error.to_string())
            .size(13)
            .color(theme.extended_palette().danger.base.color)
            .into(),
        None => text(HELPER_TEXT)
            .size(13)
            .color(tertiary_color(theme))
            .into(),
    };

    let submit_label = if submitting {
        "Processing Audio\u{2026}"
    } else {
        "Classify Dialect"
    };
    let submit = button(
        text(submit_label)
            .size(16)
            .width(Length::Fill)
            .align_x(iced::Alignment::Center),
    )
    .padding([12, 24])
    .width(Length::Fill)
    .style(button::primary)
    .on_press_maybe(session.can_submit().then_some(Message::SubmitPressed));

    column![
        header(theme),
        column![text("Video URL Input").size(17).font(bold()), input, hint].spacing(8),
        submit,
    ]
    .spacing(20)
    .into()
}

fn header<'a>(theme: &Theme) -> Element<'a, Message> {
    let primary = theme.extended_palette().primary.base.color;
    let tertiary = tertiary_color(theme);

    let chip = container(text("Powered by Transformers AI").size(12).color(primary))
        .padding([4, 12])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color { a: 0.10, ..primary })),
            border: Border {
                radius: 100.0.into(),
                width: 1.0,
                color: Color { a: 0.35, ..primary },
            },
            ..container::Style::default()
        });

    column![
        text("\u{1F310}").size(40),
        text("English Dialect Classifier").size(28).font(bold()),
        text("AI-powered English accent detection for hiring evaluation")
            .size(15)
            .color(tertiary),
        chip,
    ]
    .spacing(8)
    .align_x(iced::Alignment::Center)
    .width(Length::Fill)
    .into()
}

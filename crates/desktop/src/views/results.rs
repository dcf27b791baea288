use iced::border::Border;
use iced::widget::{column, container, progress_bar, row, text, Space};
use iced::{Background, Color, Element, Length, Theme};

use accentscope_core::classification::domain::result::ClassificationResult;
use accentscope_core::presentation::confidence::{format_percent, ConfidenceBand};
use accentscope_core::presentation::dialect_table::{display_label_of, flag_of};

use crate::app::Message;
use crate::theme::{band_color, tertiary_color};
use crate::views::bold;

/// The results section: primary card, ranked list in backend order, hiring
/// summary keyed off the primary entry.
pub fn view<'a>(results: &'a [ClassificationResult], theme: &Theme) -> Element<'a, Message> {
    let mut col = column![text("Classification Results").size(20).font(bold())].spacing(16);

    if let Some(primary) = results.first() {
        col = col.push(primary_card(primary));
    }

    col = col.push(text("Detailed Analysis").size(16).font(bold()));
    for (index, result) in results.iter().enumerate() {
        col = col.push(entry_row(index, result, theme));
    }

    if let Some(primary) = results.first() {
        col = col.push(hiring_summary(primary, theme));
    }

    col.into()
}

fn primary_card<'a>(primary: &ClassificationResult) -> Element<'a, Message> {
    container(
        column![
            text(flag_of(&primary.label)).size(48),
            text(display_label_of(&primary.label))
                .size(26)
                .font(bold())
                .color(Color::WHITE),
            text(format!("Confidence: {}", format_percent(primary.score)))
                .size(16)
                .color(Color {
                    a: 0.9,
                    ..Color::WHITE
                }),
            Space::new().height(8),
            progress_bar(0.0..=1.0, primary.score as f32).style(|_theme: &Theme| {
                progress_bar::Style {
                    background: Background::Color(Color {
                        a: 0.3,
                        ..Color::WHITE
                    }),
                    bar: Background::Color(Color::WHITE),
                    border: Border {
                        radius: 4.0.into(),
                        ..Border::default()
                    },
                }
            }),
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([28, 24])
    .style(|theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().primary.base.color,
        )),
        border: Border {
            radius: 14.0.into(),
            ..Border::default()
        },
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    })
    .into()
}

fn entry_row<'a>(index: usize, result: &ClassificationResult, theme: &Theme) -> Element<'a, Message> {
    let band = ConfidenceBand::from_score(result.score);
    let accent = band_color(band, theme);
    let is_primary = index == 0;

    let meter = progress_bar(0.0..=1.0, result.score as f32).style(move |_theme: &Theme| {
        progress_bar::Style {
            background: Background::Color(Color { a: 0.12, ..accent }),
            bar: Background::Color(accent),
            border: Border {
                radius: 3.0.into(),
                ..Border::default()
            },
        }
    });

    container(
        row![
            text(flag_of(&result.label)).size(26),
            column![
                row![
                    text(display_label_of(&result.label))
                        .size(15)
                        .font(bold())
                        .width(Length::Fill),
                    text(format_percent(result.score)).size(15).color(accent),
                ]
                .spacing(8),
                meter,
                text(band.as_str()).size(12).color(accent),
            ]
            .spacing(4)
            .width(Length::Fill),
        ]
        .spacing(14)
        .align_y(iced::Alignment::Center),
    )
    .padding([12, 16])
    .width(Length::Fill)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                radius: 12.0.into(),
                width: if is_primary { 2.0 } else { 1.0 },
                color: if is_primary {
                    palette.primary.base.color
                } else {
                    Color {
                        a: 0.15,
                        ..palette.background.base.text
                    }
                },
            },
            ..container::Style::default()
        }
    })
    .into()
}

fn hiring_summary<'a>(primary: &ClassificationResult, theme: &Theme) -> Element<'a, Message> {
    let band = ConfidenceBand::from_score(primary.score);

    container(
        column![
            text("\u{1F4BC} Hiring Evaluation Summary")
                .size(16)
                .font(bold())
                .color(theme.extended_palette().primary.base.color),
            text(format!(
                "Primary Dialect: {} ({} confidence)",
                display_label_of(&primary.label),
                format_percent(primary.score)
            ))
            .size(14),
            text(band.hiring_note())
                .size(13)
                .color(tertiary_color(theme)),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

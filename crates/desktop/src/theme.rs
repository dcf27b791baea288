use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use accentscope_core::presentation::confidence::ConfidenceBand;

pub fn app_theme() -> Theme {
    Theme::custom("AccentScope", palette())
}

fn palette() -> Palette {
    Palette {
        background: color!(0xf5, 0xf5, 0xf7),
        text: color!(0x1d, 0x1d, 0x1f),
        primary: color!(0x66, 0x7e, 0xea),
        success: color!(0x34, 0xc7, 0x59),
        warning: color!(0xff, 0x9f, 0x0a),
        danger: color!(0xff, 0x3b, 0x30),
    }
}

/// Softer text color for helper lines and captions.
pub fn tertiary_color(theme: &Theme) -> Color {
    Color {
        a: 0.6,
        ..theme.extended_palette().background.base.text
    }
}

/// Palette color for a confidence band: green, amber, red.
pub fn band_color(band: ConfidenceBand, theme: &Theme) -> Color {
    let palette = theme.extended_palette();
    match band {
        ConfidenceBand::High => palette.success.base.color,
        ConfidenceBand::Medium => palette.warning.base.color,
        ConfidenceBand::Low => palette.danger.base.color,
    }
}

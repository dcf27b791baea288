pub mod form;
pub mod results;
pub mod status;

pub(crate) fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    }
}

mod app;
mod theme;
mod views;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("AccentScope \u{2014} English Dialect Classifier")
        .theme(App::theme)
        .window(iced::window::Settings {
            size: iced::Size::new(720.0, 820.0),
            ..Default::default()
        })
        .run()
}

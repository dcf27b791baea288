use std::time::Duration;

use iced::widget::{column, container, scrollable};
use iced::{Element, Length, Task, Theme};

use accentscope_core::classification::domain::error::ClassifyError;
use accentscope_core::classification::domain::result::ResultSet;
use accentscope_core::classification::infrastructure::http_classifier::HttpClassifier;
use accentscope_core::session::{Session, SessionState};
use accentscope_core::shared::constants::{DEFAULT_BACKEND_ORIGIN, DEFAULT_REQUEST_TIMEOUT_SECS};

use crate::theme;
use crate::views;

const ORIGIN_ENV_VAR: &str = "ACCENTSCOPE_ORIGIN";

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    UrlEdited(String),
    SubmitPressed,
    ClassificationFinished(Result<ResultSet, ClassifyError>),
    DismissError,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    session: Session,
    origin: String,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let origin = std::env::var(ORIGIN_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_BACKEND_ORIGIN.to_owned());
        log::info!("using backend origin {origin}");
        (
            Self {
                session: Session::new(),
                origin,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UrlEdited(value) => {
                self.session.edit_url(value);
            }
            Message::SubmitPressed => {
                // The session guards everything: in-flight requests and
                // invalid fields both come back as None.
                if let Some(url) = self.session.begin_submit() {
                    let origin = self.origin.clone();
                    return Task::perform(
                        async move {
                            let timeout = Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS);
                            match HttpClassifier::new(&origin, timeout) {
                                Ok(classifier) => classifier.classify(&url).await,
                                Err(e) => Err(e),
                            }
                        },
                        Message::ClassificationFinished,
                    );
                }
            }
            Message::ClassificationFinished(outcome) => {
                self.session.complete(outcome);
            }
            Message::DismissError => {
                self.session.dismiss_error();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let theme = self.theme();

        let mut content = column![views::form::view(&self.session, &theme)].spacing(24);

        match self.session.state() {
            SessionState::Idle => {}
            SessionState::Submitting => {
                content = content.push(views::status::loading(&theme));
            }
            SessionState::Failed(message) => {
                content = content.push(views::status::error_banner(message, &theme));
            }
            SessionState::Succeeded(results) => {
                content = content.push(views::results::view(results, &theme));
            }
        }

        let page = container(content)
            .max_width(760)
            .padding([32, 24])
            .width(Length::Fill);

        container(scrollable(page).height(Length::Fill))
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }
}

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, text, text_input},
};

use crate::{
    core::Session,
    forms::LoginForm,
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::card,
    },
    sample::APP_NAME,
};

#[derive(Debug, Default)]
pub struct LoginScreen {
    form: LoginForm,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, _session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let submit = self
            .form
            .can_submit()
            .then_some(ScreenMessage::ScreenMessage(LoginMessage::Submit));

        let fields = column![
            text("Username"),
            text_input("Enter your username", &self.form.username)
                .on_input(|s| ScreenMessage::ScreenMessage(LoginMessage::UsernameChanged(s))),
            text("Password"),
            text_input("Enter your password", &self.form.password)
                .secure(true)
                .on_input(|s| ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(s)))
                .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit)),
            button(text("Login"))
                .width(Length::Fill)
                .on_press_maybe(submit),
            button(text("Sync with Cloud (Coming Soon)"))
                .width(Length::Fill)
                .style(button::text),
        ]
        .spacing(10);

        let content = column![
            text(APP_NAME).size(32),
            text("Manage your classes anywhere, anytime"),
            card("Sign in", fields),
        ]
        .spacing(16)
        .max_width(420.0)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::UsernameChanged(username) => {
                self.form.username = username;
                Task::none()
            }
            LoginMessage::PasswordChanged(password) => {
                self.form.password = password;
                Task::none()
            }
            LoginMessage::Submit => match self.form.submit() {
                Ok(()) => Task::done(ScreenMessage::request(Request::Login)),
                Err(err) => {
                    tracing::debug!(%err, "login blocked");
                    Task::none()
                }
            },
        }
    }
}

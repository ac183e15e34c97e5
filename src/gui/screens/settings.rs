use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, progress_bar, row, text, text_input, toggler},
};
use rfd::AsyncFileDialog;
use tracing::{info, warn};

use crate::{
    core::Session,
    export,
    forms::{SettingsForm, Toggle},
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{NavItem, card, header, shell},
    },
    sample::{STORAGE_TOTAL_MB, STORAGE_USED_MB, WIFI_NETWORK, WIFI_PASSWORD},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Username,
    FullName,
    School,
}

#[derive(Debug, Default)]
pub struct SettingsScreen {
    form: SettingsForm,
    status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    ProfileChanged(ProfileField, String),
    UpdateProfile,
    Toggled(Toggle, bool),
    Export,
    Import,
    TransferFinished(Result<String, String>),
    Logout,
}

type Msg = ScreenMessage<SettingsScreen>;

fn local(message: SettingsMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

fn switch<'a>(form: &SettingsForm, toggle: Toggle, label: &'a str, hint: &'a str) -> Element<'a, Msg> {
    row![
        column![text(label), text(hint).size(12)]
            .spacing(2)
            .width(Length::Fill),
        toggler(form.get(toggle)).on_toggle(move |on| local(SettingsMessage::Toggled(toggle, on))),
    ]
    .align_y(Center)
    .into()
}

impl Screen for SettingsScreen {
    type Message = SettingsMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, _session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let form = &self.form;

        let account = column![
            text("Username"),
            text_input("", &form.username)
                .on_input(|s| local(SettingsMessage::ProfileChanged(ProfileField::Username, s))),
            text("Full Name"),
            text_input("", &form.full_name)
                .on_input(|s| local(SettingsMessage::ProfileChanged(ProfileField::FullName, s))),
            text("School Name"),
            text_input("", &form.school)
                .on_input(|s| local(SettingsMessage::ProfileChanged(ProfileField::School, s))),
            button(text("Update Profile")).on_press(local(SettingsMessage::UpdateProfile)),
        ]
        .spacing(8);

        let mut offline = Column::new().spacing(12).push(switch(
            form,
            Toggle::OfflineSync,
            "Enable Offline Mode",
            "Allow the app to work without internet connection",
        ));
        offline = offline.push(switch(
            form,
            Toggle::WifiSharing,
            "Share over Wi-Fi",
            "Allow other devices to connect and sync data",
        ));
        if form.wifi_sharing {
            offline = offline.push(card(
                "Wi-Fi Sharing Active",
                column![
                    text(format!("Network: {WIFI_NETWORK}")).size(14),
                    text(format!("Password: {WIFI_PASSWORD}")).size(14),
                ]
                .spacing(4),
            ));
        }

        let backup = column![
            switch(
                form,
                Toggle::AutoBackup,
                "Auto Backup",
                "Automatically backup data when connected to internet",
            ),
            row![
                column![text("Last Backup"), text("Never backed up").size(12)]
                    .spacing(2)
                    .width(Length::Fill),
                button(text("Backup to Cloud (Coming Soon)")).style(button::secondary),
            ]
            .align_y(Center),
        ]
        .spacing(12);

        let mut data = column![
            row![
                button(text("Export Data"))
                    .style(button::secondary)
                    .on_press(local(SettingsMessage::Export)),
                button(text("Import Data"))
                    .style(button::secondary)
                    .on_press(local(SettingsMessage::Import)),
            ]
            .spacing(12),
            text("Storage Used"),
            progress_bar(0.0..=STORAGE_TOTAL_MB as f32, STORAGE_USED_MB as f32),
            text(format!("{STORAGE_USED_MB} MB of {STORAGE_TOTAL_MB} MB used")).size(12),
        ]
        .spacing(8);
        if let Some(status) = &self.status {
            data = data.push(text(status).size(12));
        }

        let content = column![
            header("Settings", "Manage your preferences and sync options"),
            card("Account Settings", account),
            card("Offline Sync Settings", offline),
            card("Cloud Backup", backup),
            card("Data Management", data),
            card(
                "Notifications",
                switch(
                    form,
                    Toggle::Notifications,
                    "Push Notifications",
                    "Receive notifications for assignments and deadlines",
                ),
            ),
            card(
                "Danger Zone",
                row![
                    column![text("Logout"), text("Sign out of your account").size(12)]
                        .spacing(2)
                        .width(Length::Fill),
                    button(text("Logout"))
                        .style(button::danger)
                        .on_press(local(SettingsMessage::Logout)),
                ]
                .align_y(Center),
            ),
        ]
        .spacing(20)
        .max_width(900.0);

        shell(Some(NavItem::Settings), ScreenMessage::<Self>::go, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SettingsMessage::ProfileChanged(field, value) => {
                match field {
                    ProfileField::Username => self.form.username = value,
                    ProfileField::FullName => self.form.full_name = value,
                    ProfileField::School => self.form.school = value,
                }
                Task::none()
            }
            SettingsMessage::UpdateProfile => {
                info!(username = %self.form.username, school = %self.form.school, "profile updated");
                self.status = Some("Profile updated".to_string());
                Task::none()
            }
            SettingsMessage::Toggled(toggle, on) => {
                self.form.set(toggle, on);
                Task::none()
            }
            SettingsMessage::Export => Task::perform(
                async {
                    let handle = AsyncFileDialog::new()
                        .set_title("Export ClassroomOffline data")
                        .set_file_name("classroom-offline-export.json")
                        .add_filter("JSON", &["json"])
                        .save_file()
                        .await?;
                    Some(
                        export::export_to(handle.path())
                            .await
                            .map(|snapshot| format!("Exported {}", snapshot.summary()))
                            .map_err(|err| format!("Export failed: {err:#}")),
                    )
                },
                |result| match result {
                    Some(result) => local(SettingsMessage::TransferFinished(result)),
                    None => local(SettingsMessage::TransferFinished(Ok("Export cancelled".into()))),
                },
            ),
            SettingsMessage::Import => Task::perform(
                async {
                    let handle = AsyncFileDialog::new()
                        .set_title("Import ClassroomOffline data")
                        .add_filter("JSON", &["json"])
                        .pick_file()
                        .await?;
                    Some(
                        export::import_from(handle.path())
                            .await
                            .map(|snapshot| format!("Read {}", snapshot.summary()))
                            .map_err(|err| format!("Import failed: {err:#}")),
                    )
                },
                |result| match result {
                    Some(result) => local(SettingsMessage::TransferFinished(result)),
                    None => local(SettingsMessage::TransferFinished(Ok("Import cancelled".into()))),
                },
            ),
            SettingsMessage::TransferFinished(result) => {
                self.status = Some(match result {
                    Ok(message) => message,
                    Err(message) => {
                        warn!("{message}");
                        message
                    }
                });
                Task::none()
            }
            SettingsMessage::Logout => Task::done(ScreenMessage::request(Request::Logout)),
        }
    }
}

use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, row, text, text_editor, text_input},
};
use rfd::AsyncFileDialog;
use tracing::debug;

use crate::{
    core::{SelectionUpdate, Session, View},
    forms::AssignmentDraft,
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{card, header, shell},
    },
    sample,
};

#[derive(Debug)]
pub struct AssignmentCreateScreen {
    pub(crate) draft: AssignmentDraft,
    instructions: text_editor::Content,
    due_date_text: String,
    due_date_error: Option<String>,
}

impl Default for AssignmentCreateScreen {
    fn default() -> Self {
        Self {
            draft: AssignmentDraft::default(),
            instructions: text_editor::Content::new(),
            due_date_text: String::new(),
            due_date_error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum AssignmentCreateMessage {
    TitleChanged(String),
    EditInstructions(text_editor::Action),
    DueDateChanged(String),
    GenerateQuestions,
    ChooseFiles,
    FilesChosen(Vec<PathBuf>),
    SaveDraft,
    Post,
}

type Msg = ScreenMessage<AssignmentCreateScreen>;

fn local(message: AssignmentCreateMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

fn back_to_class(session: &Session) -> Msg {
    ScreenMessage::request(Request::Navigate(
        View::Classroom,
        SelectionUpdate::default().with_class(session.selected_class_id.clone()),
    ))
}

impl Screen for AssignmentCreateScreen {
    type Message = AssignmentCreateMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let class = sample::class_by_id(session.selected_class_id.as_ref());

        let mut due_date = column![
            text("Due Date"),
            text_input("YYYY-MM-DD", &self.due_date_text)
                .on_input(|s| local(AssignmentCreateMessage::DueDateChanged(s))),
            text(self.draft.due_date_label()).size(12),
        ]
        .spacing(6);
        if let Some(err) = &self.due_date_error {
            due_date = due_date.push(text(err).size(12).style(text::danger));
        }

        let attachments = Column::with_children(
            self.draft
                .attachments
                .iter()
                .map(|path| text(path.display().to_string()).size(12).into()),
        )
        .spacing(2);

        let details = column![
            text("Assignment Title"),
            text_input("Enter assignment title...", &self.draft.title)
                .on_input(|s| local(AssignmentCreateMessage::TitleChanged(s))),
            row![
                text("Instructions").width(Length::Fill),
                button(text("Generate Questions"))
                    .style(button::secondary)
                    .on_press(local(AssignmentCreateMessage::GenerateQuestions)),
            ]
            .align_y(Center),
            text_editor(&self.instructions)
                .placeholder("Enter assignment instructions and questions...")
                .height(Length::Fixed(220.0))
                .on_action(|action| local(AssignmentCreateMessage::EditInstructions(action))),
            due_date,
            text("Attachments"),
            column![
                text("Drag and drop files here, or click to browse").size(12),
                button(text("Choose Files"))
                    .style(button::secondary)
                    .on_press(local(AssignmentCreateMessage::ChooseFiles)),
                attachments,
            ]
            .spacing(6),
        ]
        .spacing(10);

        let content = column![
            button(text("< Back to Class"))
                .style(button::text)
                .on_press(back_to_class(session)),
            header("Create Assignment", &class.name),
            card("Assignment Details", details),
            row![
                button(text("Save Draft"))
                    .style(button::secondary)
                    .on_press(local(AssignmentCreateMessage::SaveDraft)),
                button(text("Post Assignment")).on_press_maybe(
                    self.draft
                        .can_post()
                        .then(|| local(AssignmentCreateMessage::Post))
                ),
            ]
            .spacing(16),
        ]
        .spacing(20)
        .max_width(900.0);

        shell(None, ScreenMessage::<Self>::go, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AssignmentCreateMessage::TitleChanged(title) => {
                self.draft.title = title;
                Task::none()
            }
            AssignmentCreateMessage::EditInstructions(action) => {
                self.instructions.perform(action);
                self.draft.instructions = self.instructions.text().trim_end_matches('\n').to_string();
                Task::none()
            }
            AssignmentCreateMessage::DueDateChanged(value) => {
                self.due_date_error = self
                    .draft
                    .set_due_date_text(&value)
                    .err()
                    .map(|err| err.to_string());
                self.due_date_text = value;
                Task::none()
            }
            AssignmentCreateMessage::GenerateQuestions => {
                self.draft.generate_questions();
                self.instructions = text_editor::Content::with_text(&self.draft.instructions);
                Task::none()
            }
            AssignmentCreateMessage::ChooseFiles => Task::perform(
                AsyncFileDialog::new()
                    .set_title("Attach files to assignment")
                    .pick_files(),
                |handles| {
                    let paths = handles
                        .unwrap_or_default()
                        .iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect();
                    local(AssignmentCreateMessage::FilesChosen(paths))
                },
            ),
            AssignmentCreateMessage::FilesChosen(paths) => {
                debug!(count = paths.len(), "attachments chosen");
                self.draft.attach(paths);
                Task::none()
            }
            AssignmentCreateMessage::SaveDraft => {
                self.draft.save_draft(session.selected_class_id.as_ref());
                Task::done(back_to_class(session))
            }
            AssignmentCreateMessage::Post => match self.draft.post(session.selected_class_id.as_ref()) {
                Ok(_) => Task::done(back_to_class(session)),
                Err(err) => {
                    debug!(%err, "post blocked");
                    Task::none()
                }
            },
        }
    }
}

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Column, button, column, container, row, text, text_input},
};

use crate::{
    core::{AssignmentId, Session, View},
    forms::GradingPanel,
    gui::{
        screens::{Request, Screen, ScreenMessage},
        widgets::{badge, card, dot, header, shell},
    },
    sample::{self, Accent, ClassAssignment, Submission, SubmissionStatus},
};

#[derive(Debug)]
pub struct SubmissionsScreen {
    assignment: ClassAssignment,
    panel: GradingPanel,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum SubmissionsMessage {
    Open(String),
    GradeChanged(String),
    FeedbackChanged(String),
    Save,
    Cancel,
}

type Msg = ScreenMessage<SubmissionsScreen>;

fn local(message: SubmissionsMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

fn status_accent(status: SubmissionStatus) -> Accent {
    match status {
        SubmissionStatus::Submitted => Accent::Green,
        SubmissionStatus::Missing => Accent::Orange,
    }
}

impl SubmissionsScreen {
    pub fn new(assignment_id: Option<&AssignmentId>) -> Self {
        let assignment = sample::assignment_by_id(assignment_id);
        let panel = GradingPanel::new(sample::submissions(), assignment.total_points);
        Self {
            assignment,
            panel,
            error: None,
        }
    }

    fn table_row(submission: &Submission) -> Element<'_, Msg> {
        let grade = submission
            .grade
            .map(|g| format!("{g}%"))
            .unwrap_or_else(|| "-".to_string());
        let ai: Element<'_, Msg> = if submission.ai_suggestion.is_some() {
            badge("AI", Accent::Purple)
        } else {
            text("").into()
        };
        let action: Element<'_, Msg> = if submission.status == SubmissionStatus::Submitted {
            button(text("View"))
                .style(button::secondary)
                .on_press(local(SubmissionsMessage::Open(submission.id.clone())))
                .into()
        } else {
            text("").into()
        };

        row![
            row![dot(status_accent(submission.status)), text(&submission.student_name)]
                .spacing(8)
                .align_y(Center)
                .width(Length::FillPortion(4)),
            container(badge(
                submission.status.label(),
                status_accent(submission.status)
            ))
            .width(Length::FillPortion(2)),
            text(grade).width(Length::FillPortion(1)),
            container(ai).width(Length::FillPortion(1)),
            container(action).width(Length::FillPortion(2)),
        ]
        .spacing(8)
        .align_y(Center)
        .into()
    }

    fn detail(&self) -> Element<'_, Msg> {
        let Some(submission) = self.panel.selected() else {
            return card(
                "Select a Submission",
                text("Choose a student submission from the list to view and grade it."),
            );
        };

        let mut body = Column::new().spacing(12);
        if let Some(when) = &submission.submitted_at {
            body = body.push(badge(when, Accent::Blue));
        }
        if let Some(suggestion) = &submission.ai_suggestion {
            body = body.push(card("AI Grading Suggestion", text(suggestion).size(14)));
        }
        body = body
            .push(text("Student Answer:"))
            .push(
                container(text(submission.content.as_deref().unwrap_or_default()).size(14))
                    .padding(12)
                    .width(Length::Fill)
                    .style(container::rounded_box),
            )
            .push(text(format!("Grade (out of {})", self.panel.total_points())))
            .push(
                text_input("Enter grade...", &self.panel.current_grade)
                    .on_input(|s| local(SubmissionsMessage::GradeChanged(s))),
            )
            .push(text("Feedback"))
            .push(
                text_input("Enter feedback for the student...", &self.panel.feedback)
                    .on_input(|s| local(SubmissionsMessage::FeedbackChanged(s))),
            );
        if let Some(err) = &self.error {
            body = body.push(text(err).size(12).style(text::danger));
        }
        body = body.push(
            row![
                button(text("Save Grade")).on_press_maybe(
                    self.panel
                        .can_save()
                        .then(|| local(SubmissionsMessage::Save))
                ),
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(local(SubmissionsMessage::Cancel)),
            ]
            .spacing(12),
        );

        card(format!("{}'s Submission", submission.student_name), body)
    }
}

impl Screen for SubmissionsScreen {
    type Message = SubmissionsMessage;
    type ParentMessage = Request;

    fn view<'a>(&'a self, _session: &'a Session) -> Element<'a, ScreenMessage<Self>> {
        let heading: Element<'a, Msg> = row![
            text("Student").width(Length::FillPortion(4)),
            text("Status").width(Length::FillPortion(2)),
            text("Grade").width(Length::FillPortion(1)),
            text("AI").width(Length::FillPortion(1)),
            text("Actions").width(Length::FillPortion(2)),
        ]
        .spacing(8)
        .into();
        let table = Column::with_children(
            std::iter::once(heading)
                .chain(self.panel.submissions().iter().map(Self::table_row)),
        )
        .spacing(10);

        let content = column![
            button(text("< Back to Class"))
                .style(button::text)
                .on_press(ScreenMessage::go(View::Classroom)),
            header(
                "Student Submissions",
                format!(
                    "{} • Due {} • {} points",
                    self.assignment.title, self.assignment.due_date, self.assignment.total_points
                ),
            ),
            row![
                container(card(
                    format!(
                        "Submissions ({}/{})",
                        self.panel.submitted_count(),
                        self.panel.len()
                    ),
                    table,
                ))
                .width(Length::FillPortion(1)),
                container(self.detail()).width(Length::FillPortion(1)),
            ]
            .spacing(20),
        ]
        .spacing(20);

        shell(None, ScreenMessage::<Self>::go, content)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _session: &Session,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SubmissionsMessage::Open(id) => {
                self.error = None;
                self.panel.open(&id);
            }
            SubmissionsMessage::GradeChanged(grade) => self.panel.current_grade = grade,
            SubmissionsMessage::FeedbackChanged(feedback) => self.panel.feedback = feedback,
            SubmissionsMessage::Save => match self.panel.save() {
                Ok(_) => self.error = None,
                Err(err) => self.error = Some(err.to_string()),
            },
            SubmissionsMessage::Cancel => {
                self.error = None;
                self.panel.cancel();
            }
        }
        Task::none()
    }
}

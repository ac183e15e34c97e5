use std::path::PathBuf;

use thiserror::Error;
use time::{Date, macros::format_description};
use tracing::info;
use uuid::Uuid;

use crate::{
    core::ClassId,
    sample::{AssignmentStatus, GENERATED_QUESTIONS},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("assignment title is required")]
    MissingTitle,
    #[error("assignment instructions are required")]
    MissingInstructions,
    #[error("`{0}` is not a date in YYYY-MM-DD form")]
    InvalidDueDate(String),
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    pub title: String,
    pub instructions: String,
    pub due_date: Option<Date>,
    pub attachments: Vec<PathBuf>,
}

/// What saving or posting a draft produces. Only logged; nothing stores it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedAssignment {
    pub id: Uuid,
    pub class_id: Option<ClassId>,
    pub title: String,
    pub instructions: String,
    pub due_date: Option<Date>,
    pub attachments: Vec<PathBuf>,
    pub status: AssignmentStatus,
}

impl AssignmentDraft {
    /// Blank input clears the due date.
    pub fn set_due_date_text(&mut self, text: &str) -> Result<(), DraftError> {
        let text = text.trim();
        if text.is_empty() {
            self.due_date = None;
            return Ok(());
        }
        let format = format_description!("[year]-[month]-[day]");
        let date = Date::parse(text, &format)
            .map_err(|_| DraftError::InvalidDueDate(text.to_string()))?;
        self.due_date = Some(date);
        Ok(())
    }

    pub fn due_date_label(&self) -> String {
        match self.due_date {
            Some(date) => long_date(date),
            None => "Select due date".to_string(),
        }
    }

    pub fn generate_questions(&mut self) {
        if !self.instructions.is_empty() {
            self.instructions.push_str("\n\n");
        }
        self.instructions.push_str(GENERATED_QUESTIONS);
    }

    pub fn attach(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        for path in paths {
            if !self.attachments.contains(&path) {
                self.attachments.push(path);
            }
        }
    }

    pub fn can_post(&self) -> bool {
        !self.title.is_empty() && !self.instructions.is_empty()
    }

    pub fn save_draft(&self, class_id: Option<&ClassId>) -> PostedAssignment {
        let record = self.record(class_id, AssignmentStatus::Draft);
        info!(id = %record.id, title = %record.title, "saved assignment draft");
        record
    }

    pub fn post(&self, class_id: Option<&ClassId>) -> Result<PostedAssignment, DraftError> {
        if self.title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.instructions.is_empty() {
            return Err(DraftError::MissingInstructions);
        }
        let record = self.record(class_id, AssignmentStatus::Published);
        info!(
            id = %record.id,
            title = %record.title,
            attachments = record.attachments.len(),
            "posted assignment"
        );
        Ok(record)
    }

    fn record(&self, class_id: Option<&ClassId>, status: AssignmentStatus) -> PostedAssignment {
        PostedAssignment {
            id: Uuid::new_v4(),
            class_id: class_id.cloned(),
            title: self.title.clone(),
            instructions: self.instructions.clone(),
            due_date: self.due_date,
            attachments: self.attachments.clone(),
            status,
        }
    }
}

/// "January 15th, 2024".
pub fn long_date(date: Date) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.month(), day, suffix, date.year())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn generated_questions_are_separated_by_blank_line() {
        let mut draft = AssignmentDraft::default();
        draft.generate_questions();
        assert!(draft.instructions.starts_with("1. Solve for x"));

        let mut draft = AssignmentDraft {
            instructions: "Show your work.".into(),
            ..Default::default()
        };
        draft.generate_questions();
        assert!(draft.instructions.starts_with("Show your work.\n\n1. Solve for x"));
        assert!(draft.instructions.ends_with("9 cm."));
    }

    #[test]
    fn posting_needs_title_and_instructions() {
        let mut draft = AssignmentDraft::default();
        assert_eq!(draft.post(None), Err(DraftError::MissingTitle));
        draft.title = "Fractions".into();
        assert_eq!(draft.post(None), Err(DraftError::MissingInstructions));
        draft.instructions = "Do page 4".into();
        let class_id = ClassId::new("1");
        let posted = draft.post(Some(&class_id)).unwrap();
        assert_eq!(posted.status, AssignmentStatus::Published);
        assert_eq!(posted.class_id, Some(class_id));
    }

    #[test]
    fn drafts_save_without_content() {
        let draft = AssignmentDraft::default();
        assert!(!draft.can_post());
        assert_eq!(draft.save_draft(None).status, AssignmentStatus::Draft);
    }

    #[test]
    fn due_date_parsing() {
        let mut draft = AssignmentDraft::default();
        draft.set_due_date_text("2024-01-15").unwrap();
        assert_eq!(draft.due_date, Some(date!(2024 - 01 - 15)));
        assert_eq!(draft.due_date_label(), "January 15th, 2024");

        assert_eq!(
            draft.set_due_date_text("15/01/2024"),
            Err(DraftError::InvalidDueDate("15/01/2024".into()))
        );
        assert_eq!(draft.due_date, Some(date!(2024 - 01 - 15)));

        draft.set_due_date_text("  ").unwrap();
        assert_eq!(draft.due_date_label(), "Select due date");
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(long_date(date!(2024 - 03 - 01)), "March 1st, 2024");
        assert_eq!(long_date(date!(2024 - 03 - 02)), "March 2nd, 2024");
        assert_eq!(long_date(date!(2024 - 03 - 13)), "March 13th, 2024");
        assert_eq!(long_date(date!(2024 - 03 - 23)), "March 23rd, 2024");
    }

    #[test]
    fn attachments_are_deduplicated() {
        let mut draft = AssignmentDraft::default();
        draft.attach([PathBuf::from("a.pdf"), PathBuf::from("b.pdf")]);
        draft.attach([PathBuf::from("a.pdf")]);
        assert_eq!(draft.attachments.len(), 2);
    }
}

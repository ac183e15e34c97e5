use thiserror::Error;
use tracing::info;

use crate::sample::{Submission, SubmissionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("no submission is open")]
    NothingSelected,
    #[error("`{0}` is not a whole number")]
    NotANumber(String),
    #[error("grade {grade} is outside 0..={total_points}")]
    OutOfRange { grade: u32, total_points: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeRecord {
    pub submission_id: String,
    pub grade: u32,
    pub feedback: String,
}

/// Submission list plus the detail pane of the grading screen.
#[derive(Debug, Clone)]
pub struct GradingPanel {
    submissions: Vec<Submission>,
    total_points: u32,
    selected: Option<usize>,
    pub current_grade: String,
    pub feedback: String,
}

impl GradingPanel {
    pub fn new(submissions: Vec<Submission>, total_points: u32) -> Self {
        Self {
            submissions,
            total_points,
            selected: None,
            current_grade: String::new(),
            feedback: String::new(),
        }
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    pub fn submitted_count(&self) -> usize {
        self.submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::Submitted)
            .count()
    }

    pub fn selected(&self) -> Option<&Submission> {
        self.selected.map(|i| &self.submissions[i])
    }

    /// Opens a submitted row for grading. Missing or unknown rows are ignored.
    pub fn open(&mut self, submission_id: &str) -> bool {
        let Some(index) = self
            .submissions
            .iter()
            .position(|s| s.id == submission_id && s.status == SubmissionStatus::Submitted)
        else {
            return false;
        };
        self.selected = Some(index);
        self.current_grade = self.submissions[index]
            .grade
            .map(|g| g.to_string())
            .unwrap_or_default();
        self.feedback.clear();
        true
    }

    pub fn can_save(&self) -> bool {
        self.selected.is_some() && !self.current_grade.is_empty()
    }

    pub fn save(&mut self) -> Result<GradeRecord, GradeError> {
        let index = self.selected.ok_or(GradeError::NothingSelected)?;
        let raw = self.current_grade.trim();
        let grade: u32 = raw
            .parse()
            .map_err(|_| GradeError::NotANumber(raw.to_string()))?;
        if grade > self.total_points {
            return Err(GradeError::OutOfRange {
                grade,
                total_points: self.total_points,
            });
        }

        let submission = &mut self.submissions[index];
        submission.grade = Some(grade);
        let record = GradeRecord {
            submission_id: submission.id.clone(),
            grade,
            feedback: std::mem::take(&mut self.feedback),
        };
        info!(submission = %record.submission_id, grade, "saved grade");
        self.cancel();
        Ok(record)
    }

    pub fn cancel(&mut self) {
        self.selected = None;
        self.current_grade.clear();
        self.feedback.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn panel() -> GradingPanel {
        GradingPanel::new(sample::submissions(), 100)
    }

    #[test]
    fn open_prefills_existing_grade() {
        let mut panel = panel();
        panel.feedback = "stale".into();
        assert!(panel.open("1"));
        assert_eq!(panel.current_grade, "95");
        assert!(panel.feedback.is_empty());

        assert!(panel.open("2"));
        assert_eq!(panel.current_grade, "");
        assert!(!panel.can_save());
    }

    #[test]
    fn missing_submissions_cannot_be_opened() {
        let mut panel = panel();
        assert!(!panel.open("4"));
        assert!(!panel.open("99"));
        assert!(panel.selected().is_none());
    }

    #[test]
    fn save_writes_grade_and_closes() {
        let mut panel = panel();
        panel.open("2");
        panel.current_grade = "72".into();
        panel.feedback = "Show every step.".into();
        let record = panel.save().unwrap();
        assert_eq!(
            record,
            GradeRecord {
                submission_id: "2".into(),
                grade: 72,
                feedback: "Show every step.".into(),
            }
        );
        assert!(panel.selected().is_none());
        assert!(panel.current_grade.is_empty());
        assert_eq!(panel.submissions()[1].grade, Some(72));
    }

    #[test]
    fn rejects_bad_grades() {
        let mut panel = panel();
        assert_eq!(panel.save(), Err(GradeError::NothingSelected));
        panel.open("1");
        panel.current_grade = "ninety".into();
        assert_eq!(panel.save(), Err(GradeError::NotANumber("ninety".into())));
        panel.current_grade = "101".into();
        assert_eq!(
            panel.save(),
            Err(GradeError::OutOfRange { grade: 101, total_points: 100 })
        );
        assert!(panel.selected().is_some());
    }

    #[test]
    fn counts_submitted_rows() {
        let panel = panel();
        assert_eq!(panel.submitted_count(), 3);
        assert_eq!(panel.len(), 4);
    }
}

//! Screen-local form state. Each screen owns one of these and drops it when
//! the screen is unmounted; none of it reaches the session.

mod assignment;
mod grading;
mod login;
mod settings;

pub use assignment::{AssignmentDraft, DraftError, PostedAssignment, long_date};
pub use grading::{GradeError, GradeRecord, GradingPanel};
pub use login::{LoginError, LoginForm};
pub use settings::{SettingsForm, Toggle};

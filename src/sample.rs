//! Built-in sample data shown by every screen.
//!
//! Nothing here is persisted or mutated by the navigator; screens copy what
//! they need into their own local state.

use serde::{Deserialize, Serialize};
use time::{Date, macros::date};

use crate::{
    analytics::Trend,
    core::{AssignmentId, ClassId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Accent {
    pub fn rgb8(self) -> (u8, u8, u8) {
        match self {
            Accent::Blue => (0x3b, 0x82, 0xf6),
            Accent::Green => (0x10, 0xb9, 0x81),
            Accent::Purple => (0x8b, 0x5c, 0xf6),
            Accent::Orange => (0xf9, 0x73, 0x16),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub id: ClassId,
    pub name: String,
    pub description: String,
    pub students: u32,
    pub next_assignment: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub text: &'static str,
    pub when: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Published,
    Draft,
}

impl AssignmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AssignmentStatus::Published => "Published",
            AssignmentStatus::Draft => "Draft",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub id: AssignmentId,
    pub title: String,
    pub status: AssignmentStatus,
    pub due_date: Date,
    pub submissions: u32,
    pub total: u32,
    pub total_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub completion: u8,
    pub last_active: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Submitted,
    Missing,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::Missing => "Missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub student_name: String,
    pub status: SubmissionStatus,
    pub submitted_at: Option<String>,
    pub grade: Option<u32>,
    pub ai_suggestion: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyPerformance {
    pub month: &'static str,
    pub average: u8,
    pub submissions: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPerformance {
    pub class: &'static str,
    pub average: u8,
    pub completion: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentPerformance {
    pub name: &'static str,
    pub grade: &'static str,
    pub completion: u8,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Improving,
    NeedsAttention,
    Recommendation,
}

impl InsightKind {
    pub fn label(self) -> &'static str {
        match self {
            InsightKind::Improving => "Improving",
            InsightKind::NeedsAttention => "Needs Attention",
            InsightKind::Recommendation => "Recommendation",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            InsightKind::Improving => Accent::Green,
            InsightKind::NeedsAttention => Accent::Orange,
            InsightKind::Recommendation => Accent::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: &'static str,
}

pub const APP_NAME: &str = "ClassroomOffline";
pub const TEACHER_USERNAME: &str = "teacher@school.edu";
pub const TEACHER_NAME: &str = "Sarah Johnson";
pub const SCHOOL_NAME: &str = "Riverside Elementary School";
pub const WIFI_NETWORK: &str = "ClassroomOffline_SarahJ";
pub const WIFI_PASSWORD: &str = "classroom2024";
pub const STORAGE_USED_MB: u32 = 124;
pub const STORAGE_TOTAL_MB: u32 = 500;

pub const GENERATED_QUESTIONS: &str = "1. Solve for x: 2x + 5 = 15

2. Calculate the area of a rectangle with length 8 cm and width 6 cm.

3. If Sarah has 24 apples and gives away 1/3 of them, how many apples does she have left?

4. Convert the fraction 3/4 to a decimal.

5. Find the perimeter of a triangle with sides 5 cm, 7 cm, and 9 cm.";

fn class(
    id: &str,
    name: &str,
    description: &str,
    students: u32,
    next_assignment: &str,
    accent: Accent,
) -> ClassSummary {
    ClassSummary {
        id: ClassId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        students,
        next_assignment: next_assignment.to_string(),
        accent,
    }
}

pub fn classes() -> Vec<ClassSummary> {
    vec![
        class(
            "1",
            "Mathematics Grade 5",
            "Advanced mathematics concepts for 5th grade students including algebra, geometry, and problem-solving.",
            24,
            "Algebra Basics",
            Accent::Blue,
        ),
        class(
            "2",
            "Science Grade 4",
            "Hands-on science for 4th grade: living things, materials and simple experiments.",
            19,
            "Plant Life Cycle",
            Accent::Green,
        ),
        class(
            "3",
            "English Grade 6",
            "Reading, writing and poetry for 6th grade students.",
            22,
            "Poetry Analysis",
            Accent::Purple,
        ),
        class(
            "4",
            "History Grade 5",
            "From the first cities to the ancient empires.",
            26,
            "Ancient Civilizations",
            Accent::Orange,
        ),
    ]
}

/// Looks a class up by id; a missing or unknown id yields the first class.
pub fn class_by_id(id: Option<&ClassId>) -> ClassSummary {
    let mut all = classes();
    let index = id
        .and_then(|id| all.iter().position(|c| &c.id == id))
        .unwrap_or(0);
    all.swap_remove(index)
}

pub fn quick_stats() -> [QuickStat; 4] {
    [
        QuickStat { label: "Total Students", value: "91", trend: "+3 this week" },
        QuickStat { label: "Active Classes", value: "4", trend: "All running" },
        QuickStat { label: "Pending Grading", value: "12", trend: "3 overdue" },
        QuickStat { label: "Completion Rate", value: "87%", trend: "+5% this month" },
    ]
}

pub fn recent_activity() -> [Activity; 3] {
    [
        Activity {
            text: "John Smith submitted \"Algebra Basics\" assignment",
            when: "2 minutes ago",
            accent: Accent::Green,
        },
        Activity {
            text: "New assignment \"Poetry Analysis\" posted to English Grade 6",
            when: "1 hour ago",
            accent: Accent::Blue,
        },
        Activity {
            text: "Reminder: \"Plant Life Cycle\" due tomorrow",
            when: "3 hours ago",
            accent: Accent::Orange,
        },
    ]
}

pub fn class_assignments() -> Vec<ClassAssignment> {
    let assignment = |id: &str, title: &str, status, due_date, submissions| ClassAssignment {
        id: AssignmentId::new(id),
        title: title.to_string(),
        status,
        due_date,
        submissions,
        total: 24,
        total_points: 100,
    };
    vec![
        assignment("1", "Algebra Basics", AssignmentStatus::Published, date!(2024 - 01 - 15), 18),
        assignment("2", "Geometry Shapes", AssignmentStatus::Draft, date!(2024 - 01 - 20), 0),
        assignment("3", "Word Problems", AssignmentStatus::Published, date!(2024 - 01 - 10), 24),
    ]
}

/// Looks an assignment up by id; a missing or unknown id yields the first one.
pub fn assignment_by_id(id: Option<&AssignmentId>) -> ClassAssignment {
    let mut all = class_assignments();
    let index = id
        .and_then(|id| all.iter().position(|a| &a.id == id))
        .unwrap_or(0);
    all.swap_remove(index)
}

pub fn students() -> Vec<Student> {
    let student = |id: &str, name: &str, grade: &str, completion, last_active: &str| Student {
        id: id.to_string(),
        name: name.to_string(),
        grade: grade.to_string(),
        completion,
        last_active: last_active.to_string(),
    };
    vec![
        student("1", "Alice Johnson", "A", 95, "2 hours ago"),
        student("2", "Bob Smith", "B+", 87, "1 day ago"),
        student("3", "Carol Davis", "A-", 92, "3 hours ago"),
        student("4", "David Wilson", "B", 78, "2 days ago"),
    ]
}

pub fn resources() -> [Resource; 3] {
    [
        Resource { name: "Math Worksheet Template", kind: "PDF", size: "2.1 MB" },
        Resource { name: "Algebra Reference Guide", kind: "PDF", size: "1.8 MB" },
        Resource { name: "Practice Problems Set", kind: "DOC", size: "875 KB" },
    ]
}

pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "1".to_string(),
            student_name: "Alice Johnson".to_string(),
            status: SubmissionStatus::Submitted,
            submitted_at: Some("2024-01-14 10:30 AM".to_string()),
            grade: Some(95),
            ai_suggestion: Some(
                "Excellent work! Strong understanding of algebraic concepts.".to_string(),
            ),
            content: Some(
                "x = 5\n\nStep 1: 2x + 5 = 15\nStep 2: 2x = 15 - 5\nStep 3: 2x = 10\nStep 4: x = 10/2\nStep 5: x = 5"
                    .to_string(),
            ),
        },
        Submission {
            id: "2".to_string(),
            student_name: "Bob Smith".to_string(),
            status: SubmissionStatus::Submitted,
            submitted_at: Some("2024-01-15 9:15 AM".to_string()),
            grade: None,
            ai_suggestion: Some(
                "Good approach but missing final step. Consider partial credit.".to_string(),
            ),
            content: Some(
                "2x + 5 = 15\n2x = 10\nAnswer: x = 5 (but work not shown completely)".to_string(),
            ),
        },
        Submission {
            id: "3".to_string(),
            student_name: "Carol Davis".to_string(),
            status: SubmissionStatus::Submitted,
            submitted_at: Some("2024-01-13 2:45 PM".to_string()),
            grade: Some(88),
            ai_suggestion: Some(
                "Minor calculation error in step 2, but method is correct.".to_string(),
            ),
            content: Some("x = 5\n\nShowed all work correctly with clear steps.".to_string()),
        },
        Submission {
            id: "4".to_string(),
            student_name: "David Wilson".to_string(),
            status: SubmissionStatus::Missing,
            submitted_at: None,
            grade: None,
            ai_suggestion: None,
            content: None,
        },
    ]
}

pub fn monthly_performance() -> [MonthlyPerformance; 5] {
    [
        MonthlyPerformance { month: "Sep", average: 78, submissions: 85 },
        MonthlyPerformance { month: "Oct", average: 82, submissions: 88 },
        MonthlyPerformance { month: "Nov", average: 79, submissions: 82 },
        MonthlyPerformance { month: "Dec", average: 85, submissions: 90 },
        MonthlyPerformance { month: "Jan", average: 87, submissions: 92 },
    ]
}

pub fn class_performance() -> [ClassPerformance; 4] {
    [
        ClassPerformance { class: "Math Grade 5", average: 87, completion: 92 },
        ClassPerformance { class: "Science Grade 4", average: 82, completion: 88 },
        ClassPerformance { class: "English Grade 6", average: 85, completion: 90 },
        ClassPerformance { class: "History Grade 5", average: 79, completion: 85 },
    ]
}

pub fn student_performance() -> [StudentPerformance; 8] {
    [
        StudentPerformance { name: "Alice Johnson", grade: "A", completion: 95, trend: Trend::Up },
        StudentPerformance { name: "Bob Smith", grade: "B+", completion: 87, trend: Trend::Stable },
        StudentPerformance { name: "Carol Davis", grade: "A-", completion: 92, trend: Trend::Up },
        StudentPerformance { name: "David Wilson", grade: "B", completion: 78, trend: Trend::Down },
        StudentPerformance { name: "Emma Brown", grade: "A", completion: 94, trend: Trend::Up },
        StudentPerformance { name: "Frank Miller", grade: "C+", completion: 72, trend: Trend::Down },
        StudentPerformance { name: "Grace Lee", grade: "B+", completion: 89, trend: Trend::Stable },
        StudentPerformance { name: "Henry Clark", grade: "B-", completion: 83, trend: Trend::Up },
    ]
}

pub fn insights() -> [Insight; 3] {
    [
        Insight {
            kind: InsightKind::Improving,
            text: "Math Grade 5 showing 8% improvement this month",
        },
        Insight {
            kind: InsightKind::NeedsAttention,
            text: "3 students need extra help with algebra concepts",
        },
        Insight {
            kind: InsightKind::Recommendation,
            text: "Consider group activities for collaborative learning",
        },
    ]
}

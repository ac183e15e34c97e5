use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing::info;

use crate::sample::{self, ClassAssignment, ClassSummary, Student, Submission};

/// Everything the settings screen's "Export Data" writes out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    pub exported_at: String,
    pub classes: Vec<ClassSummary>,
    pub students: Vec<Student>,
    pub assignments: Vec<ClassAssignment>,
    pub submissions: Vec<Submission>,
}

impl DataSnapshot {
    pub fn from_sample() -> anyhow::Result<Self> {
        Ok(Self {
            exported_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            classes: sample::classes(),
            students: sample::students(),
            assignments: sample::class_assignments(),
            submissions: sample::submissions(),
        })
    }

    pub fn exported_at(&self) -> anyhow::Result<OffsetDateTime> {
        Ok(OffsetDateTime::parse(&self.exported_at, &Rfc3339)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} classes, {} students, {} assignments, {} submissions",
            self.classes.len(),
            self.students.len(),
            self.assignments.len(),
            self.submissions.len()
        )
    }
}

pub async fn export_to<P: AsRef<Path>>(path: P) -> anyhow::Result<DataSnapshot> {
    let path = path.as_ref();
    let snapshot = DataSnapshot::from_sample()?;
    let json = serde_json::to_vec_pretty(&snapshot)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    info!(path = %path.display(), "exported {}", snapshot.summary());
    Ok(snapshot)
}

/// Reads and validates a snapshot. The built-in sample data is left as is.
pub async fn import_from<P: AsRef<Path>>(path: P) -> anyhow::Result<DataSnapshot> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let snapshot: DataSnapshot = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a ClassroomOffline export", path.display()))?;
    snapshot
        .exported_at()
        .context("Export carries an invalid timestamp")?;
    info!(path = %path.display(), "imported {}", snapshot.summary());
    Ok(snapshot)
}

mod common;

use classroom_offline::export::{export_to, import_from};
use common::*;

#[tokio::test]
async fn export_then_import() -> anyhow::Result<()> {
    let (_dir, path) = export_path();

    let written = export_to(&path).await?;
    assert_eq!(written.classes.len(), 4);
    assert_eq!(written.submissions.len(), 4);

    let read = import_from(&path).await?;
    assert_eq!(read, written);
    assert_eq!(
        read.summary(),
        "4 classes, 4 students, 3 assignments, 4 submissions"
    );
    read.exported_at()?;

    Ok(())
}

#[tokio::test]
async fn import_rejects_foreign_json() -> anyhow::Result<()> {
    let (_dir, path) = export_path();
    tokio::fs::write(&path, br#"{"hello": "world"}"#).await?;

    let err = import_from(&path).await.unwrap_err();
    assert!(err.to_string().contains("is not a ClassroomOffline export"));
    Ok(())
}

#[tokio::test]
async fn import_reports_missing_file() {
    let (_dir, path) = export_path();
    let err = import_from(&path).await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[tokio::test]
async fn views_serialize_with_kebab_names() -> anyhow::Result<()> {
    let mut nav = logged_in_navigator();
    navigate(&mut nav, View::AssignmentCreate, Some("1"), None);
    let json = serde_json::to_value(nav.snapshot())?;
    assert_eq!(json["current_view"], "assignment-create");
    assert_eq!(json["selected_class_id"], "1");
    assert_eq!(json["selected_assignment_id"], serde_json::Value::Null);
    Ok(())
}

#![allow(dead_code)]

use classroom_offline::core::{AssignmentId, ClassId, SelectionUpdate, View, ViewNavigator};

/// Navigator that has already gone through the login screen.
pub fn logged_in_navigator() -> ViewNavigator {
    let mut nav = ViewNavigator::new();
    nav.login();
    nav
}

pub fn class(id: &str) -> Option<ClassId> {
    Some(ClassId::new(id))
}

pub fn assignment(id: &str) -> Option<AssignmentId> {
    Some(AssignmentId::new(id))
}

/// `navigate(view, class_id?, assignment_id?)` in call form.
pub fn navigate(
    nav: &mut ViewNavigator,
    view: View,
    class_id: Option<&str>,
    assignment_id: Option<&str>,
) {
    nav.navigate(
        view,
        SelectionUpdate {
            class_id: class_id.map(ClassId::new),
            assignment_id: assignment_id.map(AssignmentId::new),
        },
    );
}

/// Scratch file for export tests, removed on drop.
pub fn export_path() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("export.json");
    (dir, path)
}

use serde::{Deserialize, Serialize};

use crate::core::{
    model::{AssignmentId, ClassId},
    view::View,
};

/// Cross-screen state owned by the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub current_view: View,
    pub is_logged_in: bool,
    pub selected_class_id: Option<ClassId>,
    pub selected_assignment_id: Option<AssignmentId>,
    pub offline_mode: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            current_view: View::Login,
            is_logged_in: false,
            selected_class_id: None,
            selected_assignment_id: None,
            offline_mode: true,
        }
    }
}

/// Partial update of the sticky selections. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub class_id: Option<ClassId>,
    pub assignment_id: Option<AssignmentId>,
}

impl SelectionUpdate {
    pub fn class(class_id: impl Into<ClassId>) -> Self {
        Self {
            class_id: Some(class_id.into()),
            assignment_id: None,
        }
    }

    pub fn assignment(assignment_id: impl Into<AssignmentId>) -> Self {
        Self {
            class_id: None,
            assignment_id: Some(assignment_id.into()),
        }
    }

    pub fn with_class(mut self, class_id: Option<ClassId>) -> Self {
        self.class_id = class_id;
        self
    }
}

impl Session {
    /// Overwrite each selection that carries a non-empty id, retain the rest.
    pub fn merge_selection(&mut self, update: SelectionUpdate) {
        if let Some(class_id) = update.class_id.filter(|id| !id.is_empty()) {
            self.selected_class_id = Some(class_id);
        }
        if let Some(assignment_id) = update.assignment_id.filter(|id| !id.is_empty()) {
            self.selected_assignment_id = Some(assignment_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_only_present_fields() {
        let mut session = Session::default();
        session.merge_selection(SelectionUpdate::class("c1"));
        session.merge_selection(SelectionUpdate::assignment("a7"));
        assert_eq!(session.selected_class_id, Some(ClassId::new("c1")));
        assert_eq!(session.selected_assignment_id, Some(AssignmentId::new("a7")));

        session.merge_selection(SelectionUpdate::class("c2"));
        assert_eq!(session.selected_class_id, Some(ClassId::new("c2")));
        assert_eq!(session.selected_assignment_id, Some(AssignmentId::new("a7")));
    }

    #[test]
    fn empty_id_does_not_clear() {
        let mut session = Session::default();
        session.merge_selection(SelectionUpdate::class("c1"));
        session.merge_selection(SelectionUpdate::class(""));
        assert_eq!(session.selected_class_id, Some(ClassId::new("c1")));
    }
}

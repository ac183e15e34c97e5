mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from classroom_offline for tests
#[allow(unused_imports)]
pub use classroom_offline::core::{
    ActiveScreen, AssignmentId, ClassId, SelectionUpdate, Session, View, ViewNavigator,
};

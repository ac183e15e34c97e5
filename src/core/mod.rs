mod model;
mod navigator;
mod session;
mod view;

pub use model::{AssignmentId, ClassId};
pub use navigator::{ActiveScreen, Frame, ScreenKind, ViewNavigator};
pub use session::{SelectionUpdate, Session};
pub use view::{UnknownView, View};

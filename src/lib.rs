pub mod analytics;
pub mod core;
pub mod export;
pub mod forms;
pub mod sample;

pub use crate::core::{ActiveScreen, Frame, SelectionUpdate, Session, View, ViewNavigator};
pub use export::DataSnapshot;

#[cfg(feature = "gui")]
pub mod gui;

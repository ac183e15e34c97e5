mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{ClassroomApp, GuiOptions, run};
pub use message::Message;
pub use screens::Request;
pub use state::{AppState, ThemeChoice};

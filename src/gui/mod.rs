mod app;
mod message;
mod panel;

pub use app::{run, Viewer};
pub use message::Message;

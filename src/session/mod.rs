// ABOUTME: Session module — the conversation log and its on-disk JSON form.
// ABOUTME: Messages are role-tagged and timestamped; the log dumps to and restores from a flat file.

pub mod error;
pub mod log;
pub mod message;
pub mod persistence;

pub use error::HistoryError;
pub use log::{ConversationLog, LoadOutcome};
pub use message::{Message, Role};

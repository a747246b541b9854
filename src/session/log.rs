// ABOUTME: ConversationLog — the ordered, append-only message history owned by one session.
// ABOUTME: Supports clear, dump to a JSON file, and wholesale restore from one.

use std::path::Path;

use tracing::{debug, info};

use super::error::HistoryError;
use super::message::{Message, Role};
use super::persistence::{load_messages_from, save_messages_to};

/// What happened when a history file was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The log was replaced with `count` messages from the file.
    Loaded { count: usize },
    /// No file existed at the path; the log was left untouched.
    NotFound,
}

/// Ordered conversation history. Messages are only ever appended or cleared as a whole.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time and return a copy of it.
    pub fn append(&mut self, role: Role, content: impl Into<String>) -> Message {
        let msg = Message::new(role, content);
        self.messages.push(msg.clone());
        msg
    }

    /// Drop every message.
    pub fn clear(&mut self) {
        debug!(dropped = self.messages.len(), "clearing conversation log");
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Write the full history to `path`, overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        save_messages_to(path, &self.messages)?;
        debug!(path = %path.display(), count = self.messages.len(), "saved conversation log");
        Ok(())
    }

    /// Replace the history with the contents of `path`.
    ///
    /// A missing file is not an error: the log is left as it was and
    /// [`LoadOutcome::NotFound`] is returned. A malformed file is an error and
    /// also leaves the log unchanged.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome, HistoryError> {
        match load_messages_from(path)? {
            Some(messages) => {
                let count = messages.len();
                self.messages = messages;
                debug!(path = %path.display(), count, "loaded conversation log");
                Ok(LoadOutcome::Loaded { count })
            }
            None => {
                info!(path = %path.display(), "no conversation file found");
                Ok(LoadOutcome::NotFound)
            }
        }
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

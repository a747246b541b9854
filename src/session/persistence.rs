// ABOUTME: History file persistence — read and write a message list as indented JSON.
// ABOUTME: Writes go through a sibling temp file and a rename so a crash never leaves half a file.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::HistoryError;
use super::message::Message;

/// Sibling path used while a save is in flight.
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Read a message list from `path`.
///
/// Returns `Ok(None)` when the file does not exist. Any other read failure is an
/// I/O error, and content that is not a JSON list of messages is a parse error.
pub fn load_messages_from(path: &Path) -> Result<Option<Vec<Message>>, HistoryError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(HistoryError::io(path, e)),
    };
    let messages: Vec<Message> =
        serde_json::from_str(&content).map_err(|e| HistoryError::parse(path, e))?;
    Ok(Some(messages))
}

/// Write `messages` to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn save_messages_to(path: &Path, messages: &[Message]) -> Result<(), HistoryError> {
    let content = serde_json::to_string_pretty(messages).map_err(HistoryError::Serialize)?;
    let tmp_path = tmp_path_for(path);
    std::fs::write(&tmp_path, content).map_err(|e| HistoryError::io(path, e))?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(HistoryError::io(path, e));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::message::Role;

    fn sample_messages() -> Vec<Message> {
        vec![
            Message {
                role: Role::User,
                content: "Hello, how are you?".to_string(),
                timestamp: "2026-01-15T10:00:00+00:00".to_string(),
            },
            Message {
                role: Role::Assistant,
                content: "Hello! I'm SemireGPT. How can I help you today?".to_string(),
                timestamp: "2026-01-15T10:00:01+00:00".to_string(),
            },
        ]
    }

    #[test]
    fn messages_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");

        let original = sample_messages();
        save_messages_to(&path, &original).unwrap();

        let loaded = load_messages_from(&path).unwrap().expect("file was just written");
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_nonexistent_returns_none() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.json");
        assert!(load_messages_from(&missing).unwrap().is_none());
    }

    #[test]
    fn saved_file_is_indented() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        save_messages_to(&path, &sample_messages()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"), "expected pretty output, got {content}");
        assert!(content.contains("\n    \"role\": \"user\""));
    }

    #[test]
    fn save_is_atomic() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        save_messages_to(&path, &sample_messages()).unwrap();

        assert!(path.exists());
        assert!(
            !tmp_path_for(&path).exists(),
            "temp file should be renamed away after a successful save"
        );
    }

    #[test]
    fn save_without_parent_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("history.json");
        let err = save_messages_to(&path, &sample_messages()).unwrap_err();
        assert!(matches!(err, HistoryError::Io { .. }), "got {err:?}");
        assert!(!path.parent().unwrap().exists(), "parent must not be created");
    }

    #[test]
    fn load_garbage_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        std::fs::write(&path, "{ not a list").unwrap();

        let err = load_messages_from(&path).unwrap_err();
        assert!(matches!(err, HistoryError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn load_wrong_shape_is_parse_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("history.json");
        std::fs::write(&path, r#"[{"role":"robot","content":"x","timestamp":"t"}]"#).unwrap();

        let err = load_messages_from(&path).unwrap_err();
        assert!(matches!(err, HistoryError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let path = Path::new("/data/conversation_history.json");
        assert_eq!(
            tmp_path_for(path),
            PathBuf::from("/data/conversation_history.json.tmp")
        );
    }
}

// ABOUTME: Line-oriented interactive loop — reads commands or chat text and prints replies.
// ABOUTME: Generic over reader and writer so it can be driven by stdin/stdout or by tests.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::warn;

use crate::assistant::Assistant;
use crate::session::LoadOutcome;

/// The result of interpreting one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    /// End the session.
    Quit,
    /// Print the conversation so far.
    History,
    /// Forget the conversation.
    Clear,
    /// Write the conversation to the history file.
    Save,
    /// Replace the conversation with the history file.
    Load,
    /// Blank line; nothing to do.
    Skip,
    /// Anything else is chat text.
    Message(String),
}

impl ReplCommand {
    /// Interpret a raw input line. Commands are matched case-insensitively after trimming.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "quit" => Self::Quit,
            "history" => Self::History,
            "clear" => Self::Clear,
            "save" => Self::Save,
            "load" => Self::Load,
            "" => Self::Skip,
            _ => Self::Message(trimmed.to_string()),
        }
    }
}

fn write_banner(out: &mut impl Write, name: &str) -> std::io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "Welcome to {name}!")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\nA custom AI assistant in development")?;
    writeln!(out, "Type 'quit' to exit")?;
    writeln!(out, "Type 'history' to see conversation history")?;
    writeln!(out, "Type 'clear' to clear history")?;
    writeln!(out, "Type 'save' to save conversation")?;
    writeln!(out, "Type 'load' to restore the saved conversation")?;
    writeln!(out, "{rule}")
}

/// Run the interactive loop until `quit` or end of input.
///
/// History file failures and undecodable input lines are reported to the user
/// and the loop keeps going; only I/O failures of `input`/`output` end it.
pub fn run(
    assistant: &mut Assistant,
    mut input: impl BufRead,
    mut output: impl Write,
    history_path: &Path,
) -> anyhow::Result<()> {
    write_banner(&mut output, assistant.name())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "\nYou: ")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output, "\n\nInterrupted. Goodbye!")?;
            break;
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "discarding undecodable input line");
                writeln!(output, "\nError: input is not valid UTF-8: {e}")?;
                continue;
            }
        };

        match ReplCommand::parse(line) {
            ReplCommand::Quit => {
                writeln!(output, "\nThank you for using {}! Goodbye!", assistant.name())?;
                break;
            }
            ReplCommand::History => {
                writeln!(output, "{}", assistant.render_history())?;
            }
            ReplCommand::Clear => {
                assistant.clear_history();
                writeln!(output, "Conversation history cleared")?;
            }
            ReplCommand::Save => match assistant.save_history(history_path) {
                Ok(()) => {
                    writeln!(output, "Conversation saved to {}", history_path.display())?
                }
                Err(e) => {
                    warn!(error = %e, "save failed");
                    writeln!(output, "\nError: {e}")?;
                }
            },
            ReplCommand::Load => match assistant.load_history(history_path) {
                Ok(LoadOutcome::Loaded { .. }) => {
                    writeln!(output, "Conversation loaded from {}", history_path.display())?
                }
                Ok(LoadOutcome::NotFound) => writeln!(
                    output,
                    "No conversation file found at {}",
                    history_path.display()
                )?,
                Err(e) => {
                    warn!(error = %e, "load failed");
                    writeln!(output, "\nError: {e}")?;
                }
            },
            ReplCommand::Skip => {}
            ReplCommand::Message(text) => {
                let reply = assistant.get_response(&text);
                writeln!(output, "\n{}: {reply}", assistant.name())?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

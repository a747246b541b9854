// ABOUTME: Assistant session — owns one conversation log and one response router.
// ABOUTME: Each call to get_response records the user turn, routes it, and records the reply.

use std::path::Path;

use crate::config::AssistantConfig;
use crate::router::ResponseRouter;
use crate::session::{ConversationLog, HistoryError, LoadOutcome, Role};

/// A single chat session. Sessions share nothing, so several can run side by side.
#[derive(Debug, Clone)]
pub struct Assistant {
    name: String,
    system_prompt: String,
    router: ResponseRouter,
    log: ConversationLog,
}

impl Assistant {
    /// Create a session with the built-in rules and an empty history.
    pub fn new(config: &AssistantConfig) -> Self {
        Self::with_router(config, ResponseRouter::default())
    }

    pub fn with_router(config: &AssistantConfig, router: ResponseRouter) -> Self {
        Self {
            name: config.name.clone(),
            system_prompt: config.system_prompt.clone(),
            router,
            log: ConversationLog::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Answer `input`, recording both sides of the exchange in order.
    pub fn get_response(&mut self, input: &str) -> String {
        self.log.append(Role::User, input);
        let reply = self.router.respond(input);
        self.log.append(Role::Assistant, reply.as_str());
        reply
    }

    pub fn clear_history(&mut self) {
        self.log.clear();
    }

    pub fn save_history(&self, path: &Path) -> Result<(), HistoryError> {
        self.log.save(path)
    }

    pub fn load_history(&mut self, path: &Path) -> Result<LoadOutcome, HistoryError> {
        self.log.load(path)
    }

    /// Human-readable dump of the whole conversation.
    pub fn render_history(&self) -> String {
        let mut out = String::from("\n=== Conversation History ===\n");
        for msg in &self.log {
            out.push_str(&format!("\n{}: {}\n", msg.role, msg.content));
        }
        out.push('\n');
        out.push_str(&"=".repeat(30));
        out
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(&AssistantConfig::default())
    }
}

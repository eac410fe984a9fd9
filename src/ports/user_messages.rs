//! User-visible message port.
//!
//! A channel for non-fatal messages shown to the end user or an operator
//! (the equivalent of a flash message). When no request context exists the
//! sink may simply log.

use serde::{Deserialize, Serialize};

/// Severity of a user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Error,
}

/// A message queued for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// Sink for user-visible messages. Recording a message never fails.
pub trait UserMessages: Send + Sync {
    fn push(&self, message: UserMessage);

    fn info(&self, text: &str) {
        self.push(UserMessage {
            level: MessageLevel::Info,
            text: text.to_string(),
        });
    }

    fn error(&self, text: &str) {
        self.push(UserMessage {
            level: MessageLevel::Error,
            text: text.to_string(),
        });
    }
}

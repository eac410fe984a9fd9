//! User-visible message sinks.

use std::sync::{Arc, Mutex};

use crate::ports::{MessageLevel, UserMessage, UserMessages};

/// Collects messages for the current request so they can be rendered.
#[derive(Debug, Clone, Default)]
pub struct CollectedMessages {
    messages: Arc<Mutex<Vec<UserMessage>>>,
}

impl CollectedMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued message.
    pub fn drain(&self) -> Vec<UserMessage> {
        match self.messages.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Copies queued messages without removing them.
    pub fn snapshot(&self) -> Vec<UserMessage> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn errors(&self) -> Vec<String> {
        self.snapshot()
            .into_iter()
            .filter(|m| m.level == MessageLevel::Error)
            .map(|m| m.text)
            .collect()
    }
}

impl UserMessages for CollectedMessages {
    fn push(&self, message: UserMessage) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message),
            Err(poisoned) => poisoned.into_inner().push(message),
        }
    }
}

/// Sink used when there is no request to attach messages to; messages go
/// to the log instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedMessages;

impl UserMessages for LoggedMessages {
    fn push(&self, message: UserMessage) {
        match message.level {
            MessageLevel::Info => tracing::info!(text = %message.text, "user message"),
            MessageLevel::Error => tracing::error!(text = %message.text, "user message"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_messages_keep_order_and_drain() {
        let sink = CollectedMessages::new();
        sink.info("welcome");
        sink.error("there was an error");

        assert_eq!(sink.errors(), vec!["there was an error".to_string()]);
        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].level, MessageLevel::Info);
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn clones_share_the_queue() {
        let sink = CollectedMessages::new();
        let handle = sink.clone();
        handle.error("boom");
        assert_eq!(sink.errors().len(), 1);
    }
}

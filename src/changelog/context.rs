//! Per-operation logging state

/// Text marking a completion record ("has been created." etc.)
pub const COMPLETION_MARKER: &str = "has been";

/// State carried across the records of one logical operation
///
/// The host creates one context per request (or other unit of work) and
/// passes it to every lifecycle hook in that unit. It only decides where
/// separator lines go; two operations never share one, so concurrent
/// requests cannot move each other's separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationContext {
    last_message: Option<String>,
}

impl OperationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent event record written in this operation
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Whether the most recent event record was a completion record
    pub fn follows_completion(&self) -> bool {
        self.last_message
            .as_deref()
            .is_some_and(|m| m.contains(COMPLETION_MARKER))
    }

    pub(crate) fn remember(&mut self, message: &str) {
        self.last_message = Some(message.to_string());
    }
}

/// Whether `message` is a completion record
pub fn is_completion(message: &str) -> bool {
    message.contains(COMPLETION_MARKER)
}

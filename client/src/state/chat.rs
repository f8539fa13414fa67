//! State for the floating copilot chat widget.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use ops::copilot::{Conversation, PendingReply};

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: Conversation,
    /// Current contents of the input box.
    pub input: String,
}

impl ChatState {
    /// Send button is enabled only for non-blank input.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Submit the input box. Clears it and returns the reply to deliver later.
    pub fn submit(&mut self) -> Option<PendingReply> {
        let reply = self.conversation.submit(&self.input)?;
        self.input.clear();
        Some(reply)
    }
}

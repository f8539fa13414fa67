//! Chat copilot: canned answers selected by keyword rules.
//!
//! DESIGN
//! ======
//! Rules are checked in order against the lowercased query and the first
//! match wins. Anything unmatched gets the help fallback. A `Conversation`
//! appends the user's message at once and hands back the bot answer as a
//! `PendingReply` so the UI can deliver it after `REPLY_DELAY_MS`.

#[cfg(test)]
#[path = "copilot_test.rs"]
mod copilot_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Delay before the bot answer appears.
pub const REPLY_DELAY_MS: u64 = 500;

pub const FALLBACK_ANSWER: &str =
    "Sorry, I couldn't understand your request. Try asking about deployment version, pod status, or configs.";

struct Rule {
    all_of: &'static [&'static str],
    any_of: &'static [&'static str],
    answer: &'static str,
}

impl Rule {
    fn matches(&self, query: &str) -> bool {
        self.all_of.iter().all(|kw| query.contains(kw))
            && (self.any_of.is_empty() || self.any_of.iter().any(|kw| query.contains(kw)))
    }
}

const RULES: &[Rule] = &[
    Rule {
        all_of: &["version", "login-service"],
        any_of: &[],
        answer: "Login-service in prod is currently running version `v2.3.1`.",
    },
    Rule {
        all_of: &["status", "pods"],
        any_of: &[],
        answer: "All pods are running: 3/3 Ready in `auth-service-prod`.",
    },
    Rule {
        all_of: &[],
        any_of: &["env", "config"],
        answer: "Environment variables for `payment-service-prod`:\n- DB_URL: postgres://...\n- FEATURE_X_ENABLED: true",
    },
];

/// Answer a free-text operations question.
#[must_use]
pub fn answer(query: &str) -> &'static str {
    let q = query.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&q)).map_or(FALLBACK_ANSWER, |rule| rule.answer)
}

/// Messages containing inline code render in a monospace face.
#[must_use]
pub fn is_code_styled(text: &str) -> bool {
    text.contains('`')
}

// =============================================================================
// CONVERSATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), sender, text: text.into() }
    }
}

/// Bot answer waiting for its delivery delay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply(ChatMessage);

impl PendingReply {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0.text
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Record the user's message and compute the reply.
    ///
    /// Blank input is ignored and returns `None`. Non-blank input is stored
    /// verbatim, surrounding whitespace included.
    pub fn submit(&mut self, input: &str) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, input));
        Some(PendingReply(ChatMessage::new(Sender::Bot, answer(input))))
    }

    /// Append a previously computed reply.
    pub fn deliver(&mut self, reply: PendingReply) {
        self.messages.push(reply.0);
    }
}

//! Support chat - View Model

use contracts::domain::a007_chat::{error_reply, ChatMessage};
use leptos::prelude::*;

use crate::shared::api_utils::ApiError;

pub const UNAVAILABLE_REPLY: &str =
    "Sorry, the AI assistant is currently unavailable. Please try again later.";
pub const EMPTY_REPLY: &str = "Sorry, I received an unexpected response format.";

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub is_open: RwSignal<bool>,
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            is_open: RwSignal::new(false),
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
        }
    }

    /// Moves the input into the history; returns the history to send, or None
    /// when there is nothing to send or a reply is still pending.
    pub fn take_outgoing(&self) -> Option<Vec<ChatMessage>> {
        if self.is_sending.get_untracked() {
            return None;
        }
        let history = append_user_message(&self.messages.get_untracked(), &self.input.get_untracked())?;
        self.input.set(String::new());
        self.messages.set(history.clone());
        self.is_sending.set(true);
        Some(history)
    }

    pub fn receive(&self, reply: Result<String, ApiError>) {
        let text = match reply {
            Ok(text) if text.is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                log::error!("Chat request failed: {}", e);
                reply_for_error(&e)
            }
        };
        self.messages.update(|m| m.push(ChatMessage::assistant(text)));
        self.is_sending.set(false);
    }
}

/// History plus the trimmed user message; None for blank input.
pub fn append_user_message(history: &[ChatMessage], input: &str) -> Option<Vec<ChatMessage>> {
    let text = input.trim();
    if text.is_empty() {
        return None;
    }
    let mut next = history.to_vec();
    next.push(ChatMessage::user(text));
    Some(next)
}

/// Failed requests show up as the assistant's reply.
pub fn reply_for_error(err: &ApiError) -> String {
    match err {
        ApiError::Http { status, message } => error_reply(*status, message),
        ApiError::Unauthorized | ApiError::Forbidden => err.user_message(),
        ApiError::Network(_) | ApiError::Parse(_) => UNAVAILABLE_REPLY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_chat::ChatRole;

    #[test]
    fn test_append_user_message() {
        assert!(append_user_message(&[], "   ").is_none());
        let history = vec![ChatMessage::assistant("Hi!")];
        let next = append_user_message(&history, "  where is my order? ").unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(next[1].role, ChatRole::User);
        assert_eq!(next[1].content, "where is my order?");
    }

    #[test]
    fn test_reply_for_error() {
        let short = ApiError::Http { status: 400, message: "Message history cannot be empty.".into() };
        assert_eq!(reply_for_error(&short), "Error: Message history cannot be empty.");
        let empty = ApiError::Http { status: 502, message: String::new() };
        assert_eq!(
            reply_for_error(&empty),
            "Error: Could not connect to the AI assistant (Status: 502)."
        );
        assert_eq!(reply_for_error(&ApiError::Network("down".into())), UNAVAILABLE_REPLY);
    }
}

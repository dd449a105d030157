use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_MODEL: &str = "llama2:7b";

/// Longest plain-text error body that is shown to the user verbatim.
pub const MAX_INLINE_ERROR_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat/conversation`; carries the whole history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConversationRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatConversationRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            model: DEFAULT_CHAT_MODEL.to_string(),
            messages,
        }
    }
}

/// Text shown as the assistant's reply when the backend answered with an error status.
pub fn error_reply(status: u16, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() && body.chars().count() < MAX_INLINE_ERROR_LEN {
        format!("Error: {}", body)
    } else {
        format!(
            "Error: Could not connect to the AI assistant (Status: {}).",
            status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = ChatConversationRequest::new(vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
        ]);
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"model":"llama2:7b","messages":[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]}"#
        );
    }

    #[test]
    fn test_error_reply() {
        assert_eq!(error_reply(400, "Message history cannot be empty."), "Error: Message history cannot be empty.");
        let long = "x".repeat(300);
        assert_eq!(
            error_reply(500, &long),
            "Error: Could not connect to the AI assistant (Status: 500)."
        );
        assert_eq!(
            error_reply(502, "   "),
            "Error: Could not connect to the AI assistant (Status: 502)."
        );
    }
}

use contracts::domain::a007_chat::{ChatConversationRequest, ChatMessage};

use crate::shared::api_utils::{send_json_for_text, ApiError, Verb};

/// Sends the whole conversation; the reply is plain text.
pub async fn send_conversation(history: Vec<ChatMessage>) -> Result<String, ApiError> {
    let request = ChatConversationRequest::new(history);
    let reply = send_json_for_text(Verb::Post, "/api/chat/conversation", &request).await?;
    Ok(reply.trim().to_string())
}

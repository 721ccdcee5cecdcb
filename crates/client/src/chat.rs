use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::{ClientError, TripClient};

pub const RESPONSE_FALLBACK: &str = "Sorry, I couldn't get a response. Please try again.";
pub const CONNECT_FALLBACK: &str = "Sorry, I couldn't connect to the server. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            sent_at: Utc::now(),
        }
    }
}

/// The visible conversation. Each user message gets exactly one
/// assistant entry: the server's reply or a fixed fallback.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the user's message and returns the text to send, or `None`
    /// when the input is blank.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(text, Sender::User));
        Some(text.to_owned())
    }

    /// Appends the assistant entry for a settled request.
    pub fn resolve(&mut self, outcome: Result<String, ClientError>) -> &ChatMessage {
        let text = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                if err.is_transport() {
                    CONNECT_FALLBACK.to_owned()
                } else {
                    RESPONSE_FALLBACK.to_owned()
                }
            }
        };
        self.messages.push(ChatMessage::new(text, Sender::Ai));
        &self.messages[self.messages.len() - 1]
    }

    /// Sends `input` and waits for the reply. Blank input is a no-op.
    pub async fn send(&mut self, client: &TripClient, input: &str) -> Option<&ChatMessage> {
        let text = self.push_user(input)?;
        let outcome = client.send_chat(&text).await;
        Some(self.resolve(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new();
        assert!(session.push_user("   ").is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn replies_append_in_settlement_order() {
        let mut session = ChatSession::new();
        session.push_user("first");
        session.push_user("second");
        session.resolve(Ok("reply to second".to_string()));
        session.resolve(Ok("reply to first".to_string()));

        let texts: Vec<_> = session.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["first", "second", "reply to second", "reply to first"]
        );
    }

    #[tokio::test]
    async fn reply_is_shown_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": { "text": "  Try the <b>market</b>  " }
            })))
            .mount(&server)
            .await;

        let client = TripClient::new(&server.uri()).unwrap();
        let mut session = ChatSession::new();
        let reply = session.send(&client, "  shopping?  ").await.unwrap();
        assert_eq!(reply.text, "  Try the <b>market</b>  ");
        assert_eq!(reply.sender, Sender::Ai);
        assert_eq!(session.messages()[0].text, "shopping?");
    }

    #[tokio::test]
    async fn rejected_reply_appends_one_response_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })),
            )
            .mount(&server)
            .await;

        let client = TripClient::new(&server.uri()).unwrap();
        let mut session = ChatSession::new();
        session.send(&client, "hello").await;

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].text, RESPONSE_FALLBACK);
    }

    #[tokio::test]
    async fn unreachable_server_appends_one_connect_fallback() {
        let client = TripClient::new("http://127.0.0.1:1").unwrap();
        let mut session = ChatSession::new();
        session.send(&client, "hello").await;

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].text, CONNECT_FALLBACK);
        assert_eq!(messages[1].sender, Sender::Ai);
    }
}

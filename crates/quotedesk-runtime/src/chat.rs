use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::config::ChatConfig;

/// Shown whenever the chat backend cannot answer.
pub const FALLBACK_REPLY: &str = "I apologize, but I'm having trouble connecting to the server right now.
Please try again later or contact us directly at:

Phone: +1 (555) 123-4567
Email: support@contractorpro.com

Our team is available Mon-Fri 8AM-6PM EST.";

pub const WELCOME_MESSAGE: &str = "Welcome to Engineers Veedu! I'm here to help you with information about our construction services, projects, and more.";

/// Starter prompts offered before the first message.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What services do you offer?",
    "How can I get a quote?",
    "What areas do you serve?",
    "Tell me about your recent projects",
];

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Server answered with a non-2xx status
    Status(u16),
    /// Connection, DNS or timeout failure
    Transport(String),
    /// Body was not `{"response": string}`
    Decode(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Status(code) => write!(f, "chat endpoint returned HTTP {}", code),
            ChatError::Transport(msg) => write!(f, "chat transport failed: {}", msg),
            ChatError::Decode(msg) => write!(f, "chat response undecodable: {}", msg),
        }
    }
}

impl std::error::Error for ChatError {}

/// One request/response exchange with the chat backend.
pub trait ChatTransport {
    fn send(&self, message: &str) -> Result<String, ChatError>;
}

/// Blocking HTTP transport posting JSON to `{base_url}/chat`.
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &ChatConfig) -> Self {
        let timeout = Duration::from_millis(config.timeout_ms.max(100));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();

        Self {
            agent,
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatTransport for HttpTransport {
    fn send(&self, message: &str) -> Result<String, ChatError> {
        tracing::debug!(endpoint = %self.endpoint, "posting chat message");

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(ChatRequest { message })
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => ChatError::Status(code),
                ureq::Error::Transport(transport) => ChatError::Transport(transport.to_string()),
            })?;

        let body: ChatResponse = response
            .into_json()
            .map_err(|e| ChatError::Decode(e.to_string()))?;
        Ok(body.response)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    Answer(String),
    Fallback,
}

impl ChatReply {
    pub fn text(&self) -> &str {
        match self {
            ChatReply::Answer(text) => text,
            ChatReply::Fallback => FALLBACK_REPLY,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ChatReply::Fallback)
    }
}

/// FAQ widget client. Never retries; every failure becomes the fallback.
pub struct ChatClient<T: ChatTransport> {
    transport: T,
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// `None` for a blank message, which is not sent.
    pub fn ask(&self, message: &str) -> Option<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }

        Some(match self.transport.send(message) {
            Ok(answer) => ChatReply::Answer(answer),
            Err(err) => {
                tracing::warn!(error = %err, "chat unavailable, using fallback reply");
                ChatReply::Fallback
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct StubTransport {
        result: Result<String, ChatError>,
        sent: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn new(result: Result<String, ChatError>) -> Self {
            Self {
                result,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChatTransport for &StubTransport {
        fn send(&self, message: &str) -> Result<String, ChatError> {
            self.sent.borrow_mut().push(message.to_string());
            self.result.clone()
        }
    }

    #[test]
    fn test_answer_passes_through_trimmed_message() {
        let stub = StubTransport::new(Ok("We build homes.".to_string()));
        let client = ChatClient::new(&stub);

        let reply = client.ask("  What services do you offer? ").unwrap();
        assert_eq!(reply, ChatReply::Answer("We build homes.".to_string()));
        assert_eq!(*stub.sent.borrow(), vec!["What services do you offer?"]);
    }

    #[test]
    fn test_blank_message_not_sent() {
        let stub = StubTransport::new(Ok("unused".to_string()));
        let client = ChatClient::new(&stub);

        assert_eq!(client.ask("   "), None);
        assert!(stub.sent.borrow().is_empty());
    }

    #[test]
    fn test_failures_fall_back() {
        for err in [
            ChatError::Status(500),
            ChatError::Transport("connection refused".to_string()),
            ChatError::Decode("missing field `response`".to_string()),
        ] {
            let stub = StubTransport::new(Err(err));
            let reply = ChatClient::new(&stub).ask("hello").unwrap();
            assert!(reply.is_fallback());
            assert!(reply.text().contains("support@contractorpro.com"));
            assert_eq!(stub.sent.borrow().len(), 1);
        }
    }

    #[test]
    fn test_unreachable_server_falls_back() {
        let config = ChatConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_ms: 200,
        };
        let transport = HttpTransport::new(&config);
        assert_eq!(transport.endpoint(), "http://127.0.0.1:9/chat");

        let reply = ChatClient::new(transport).ask("hello").unwrap();
        assert!(reply.is_fallback());
    }
}

//! Replay transport backed by recorded responses.
//!
//! Responses are queued per operation and handed out in FIFO order, one per
//! call. Every call is recorded so callers can assert on what was sent.
//! Cassettes are JSON documents:
//!
//! ```json
//! {"interactions": [{"operation": "get_languages", "response": {"name": "data"}}]}
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::model::{Params, RawNode};
use crate::transport::Transport;

/// One recorded request/response pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub operation: String,
    pub response: RawNode,
}

/// A set of recorded interactions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cassette {
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// A call observed by [`ReplayTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: String,
    pub body: Params,
}

type Reply = Result<RawNode, String>;

/// Transport that replays queued responses instead of calling a service.
#[derive(Debug, Default)]
pub struct ReplayTransport {
    replies: Mutex<FxHashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ReplayTransport {
    /// Creates a transport with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that replays every interaction of a cassette.
    pub fn from_cassette(cassette: Cassette) -> Self {
        let transport = Self::new();
        for interaction in cassette.interactions {
            transport.push_response(interaction.operation, interaction.response);
        }
        transport
    }

    /// Parses a JSON cassette and creates a transport from it.
    pub fn from_cassette_json(json: &str) -> Result<Self, serde_json::Error> {
        Cassette::from_json(json).map(Self::from_cassette)
    }

    /// Queues a response for `operation`.
    pub fn push_response(&self, operation: impl Into<String>, response: RawNode) {
        self.enqueue(operation.into(), Ok(response));
    }

    /// Queues a transport failure for `operation`.
    pub fn push_failure(&self, operation: impl Into<String>, message: impl Into<String>) {
        self.enqueue(operation.into(), Err(message.into()));
    }

    /// Returns every call made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns how many times `operation` was called.
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|c| c.operation == operation)
            .count()
    }

    /// Returns how many queued replies remain for `operation`.
    pub fn pending(&self, operation: &str) -> usize {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(operation)
            .map_or(0, VecDeque::len)
    }

    fn enqueue(&self, operation: String, reply: Reply) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(operation)
            .or_default()
            .push_back(reply);
    }
}

impl Transport for ReplayTransport {
    fn call(&self, operation: &str, body: &Params) -> Result<RawNode, TransportError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                operation: operation.to_string(),
                body: body.clone(),
            });

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(operation)
            .and_then(VecDeque::pop_front);

        match reply {
            Some(Ok(node)) => Ok(node),
            Some(Err(message)) => Err(TransportError::new(message)),
            None => Err(TransportError::new(format!("no recorded response for `{operation}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_are_fifo_per_operation() {
        let transport = ReplayTransport::new();
        transport.push_response("op", RawNode::leaf("data", "1"));
        transport.push_response("op", RawNode::leaf("data", "2"));
        transport.push_response("other", RawNode::leaf("data", "x"));

        let first = transport.call("op", &Params::new()).unwrap();
        let second = transport.call("op", &Params::new()).unwrap();
        assert_eq!(first.text(), Some("1"));
        assert_eq!(second.text(), Some("2"));
        assert!(transport.call("op", &Params::new()).is_err());
        assert_eq!(transport.pending("other"), 1);
    }

    #[test]
    fn test_records_calls_including_failures() {
        let transport = ReplayTransport::new();
        transport.push_failure("op", "connection refused");

        let err = transport.call("op", &Params::new().with("article_id", 5i64)).unwrap_err();
        assert_eq!(err.message(), "connection refused");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, "op");
        assert_eq!(calls[0].body.get("article_id").and_then(|v| v.as_int()), Some(5));
        assert_eq!(transport.call_count("op"), 1);
        assert_eq!(transport.call_count("missing"), 0);
    }

    #[test]
    fn test_from_cassette_json() {
        let json = r#"{
            "interactions": [
                {"operation": "get_languages", "response": {"name": "data", "children": [
                    {"name": "array", "children": [
                        {"name": "array", "children": [
                            {"name": "languageCode", "text": "lv"}
                        ]}
                    ]}
                ]}}
            ]
        }"#;
        let transport = ReplayTransport::from_cassette_json(json).unwrap();
        assert_eq!(transport.pending("get_languages"), 1);
        let node = transport.call("get_languages", &Params::new()).unwrap();
        assert_eq!(node.name, "data");
    }

    #[test]
    fn test_malformed_cassette_is_rejected() {
        assert!(ReplayTransport::from_cassette_json(r#"{"interactions": [{"operation": 1}]}"#).is_err());
    }
}

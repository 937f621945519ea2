use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Greeting carried by every response.
pub const GREETING: &str = "Hello, World!";

/// Payload returned for each invocation.
///
/// Serializes as `{"message": ..., "input": ...}`; `input` is the invocation
/// event copied verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub message: String,

    pub input: Value,
}

impl Response {
    pub fn new(input: Value) -> Self {
        Self {
            message: GREETING.to_string(),
            input,
        }
    }
}

use crate::response::Response;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// One local invocation of the function.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub request_id: String,

    pub payload: Value,

    pub metadata: HashMap<String, String>,
}

impl Invocation {
    pub fn new(payload: Value) -> Self {
        Self::with_request_id(uuid::Uuid::new_v4().to_string(), payload)
    }

    pub fn with_request_id(request_id: impl Into<String>, payload: Value) -> Self {
        Self {
            request_id: request_id.into(),
            payload,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub request_id: String,

    pub response: Response,

    pub execution_time_ms: u64,
}

/// Wraps `input` in a [`Response`] carrying the greeting.
pub fn greet(input: Value) -> Response {
    Response::new(input)
}

/// Entry point handed to the runtime API client. Never fails.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    debug!(
        "Handling invocation {}: {:?}",
        event.context.request_id, event.payload
    );

    Ok(greet(event.payload))
}

pub fn invoke(invocation: Invocation) -> InvocationResult {
    let start = Instant::now();
    debug!("Invoking locally: {} ({:?})", invocation.request_id, invocation.metadata);

    let response = greet(invocation.payload);
    let execution_time_ms = start.elapsed().as_millis() as u64;

    InvocationResult {
        request_id: invocation.request_id,
        response,
        execution_time_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn event(payload: Value, request_id: &str) -> LambdaEvent<Value> {
        let mut context = Context::default();
        context.request_id = request_id.to_string();
        LambdaEvent::new(payload, context)
    }

    #[test]
    fn test_greet_wraps_input() {
        let response = greet(json!({"key": "value"}));
        assert_eq!(response.message, "Hello, World!");
        assert_eq!(response.input, json!({"key": "value"}));
    }

    #[tokio::test]
    async fn test_handler_echoes_payload() {
        let response = handler(event(json!({"nested": {"a": [1, null, "x"]}}), "req-1"))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "Hello, World!", "input": {"nested": {"a": [1, null, "x"]}}})
        );
    }

    #[tokio::test]
    async fn test_handler_is_idempotent() {
        let payload = json!({"count": 3, "tags": ["a", "b"]});
        let first = handler(event(payload.clone(), "req-1")).await.unwrap();
        let second = handler(event(payload, "req-2")).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_local_invocations_get_unique_ids() {
        let a = Invocation::new(Value::Null);
        let b = Invocation::new(Value::Null);
        assert_ne!(a.request_id, b.request_id);
        assert!(uuid::Uuid::parse_str(&a.request_id).is_ok());
    }

    #[test]
    fn test_invoke_keeps_request_id() {
        let invocation = Invocation::with_request_id("local-1", json!("hi")).with_metadata("source", "test");
        let result = invoke(invocation);
        assert_eq!(result.request_id, "local-1");
        assert_eq!(result.response, Response::new(json!("hi")));
    }
}

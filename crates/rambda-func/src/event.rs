use crate::error::Result;
use serde_json::Value;
use std::io::Read;

/// Parses a raw event body. Blank input is the `null` event.
pub fn parse_event(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_str(raw)?)
}

pub fn read_event<R: Read>(mut reader: R) -> Result<Value> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_event(&raw)
}

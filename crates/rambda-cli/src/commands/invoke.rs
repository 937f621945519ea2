use anyhow::{Context, Result};
use rambda_func::{invoke, parse_event, read_event, Invocation};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

pub async fn execute(payload: Option<String>, file: Option<PathBuf>, pretty: bool) -> Result<()> {
    let (source, payload) = resolve_payload(payload, file, std::io::stdin().lock())?;

    let invocation = Invocation::new(payload).with_metadata("source", source.as_str());
    let result = invoke(invocation);

    info!(
        "Invocation {} from {} completed in {}ms",
        result.request_id, source, result.execution_time_ms
    );

    println!("{}", render(&result.response, pretty)?);

    Ok(())
}

/// Picks the payload source and returns its label with the parsed value.
///
/// `--payload` wins over `--file`; a missing file or `-` falls back to `stdin`.
pub fn resolve_payload<R: Read>(
    payload: Option<String>,
    file: Option<PathBuf>,
    stdin: R,
) -> Result<(String, Value)> {
    match (payload, file) {
        (Some(inline), _) => Ok(("inline".to_string(), parse_payload(&inline)?)),
        (None, Some(path)) if path != Path::new("-") => {
            let value = read_payload_file(&path)?;
            Ok((path.display().to_string(), value))
        }
        _ => Ok(("stdin".to_string(), read_payload(stdin)?)),
    }
}

pub fn parse_payload(raw: &str) -> Result<Value> {
    parse_event(raw).context("Payload is not valid JSON")
}

pub fn read_payload<R: Read>(reader: R) -> Result<Value> {
    read_event(reader).context("Failed to read payload")
}

pub fn read_payload_file(path: &Path) -> Result<Value> {
    if !path.is_file() {
        anyhow::bail!("Payload file not found: {}", path.display());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload file: {}", path.display()))?;
    parse_payload(&raw).with_context(|| format!("Invalid payload in {}", path.display()))
}

pub fn render<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

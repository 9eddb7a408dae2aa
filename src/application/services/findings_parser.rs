use serde_json::Value;

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Removes a leading ```` ```json ```` fence and a trailing ```` ``` ```` fence, if present.
pub fn strip_json_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let without_open = trimmed.strip_prefix(JSON_FENCE_OPEN).unwrap_or(trimmed);
    let without_close = without_open
        .trim_end()
        .strip_suffix(FENCE_CLOSE)
        .unwrap_or(without_open);
    without_close.trim()
}

/// Parses the model's fenced JSON reply into a structured value.
pub fn parse_findings(reply: &str) -> Result<Value, FindingsParseError> {
    let payload = strip_json_fence(reply);
    serde_json::from_str(payload).map_err(|e| FindingsParseError::InvalidJson(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum FindingsParseError {
    #[error("model reply is not valid JSON: {0}")]
    InvalidJson(String),
}

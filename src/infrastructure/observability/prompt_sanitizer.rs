const MAX_VISIBLE_CHARS: usize = 100;

const SENSITIVE_PATTERNS: [(&str, &str); 4] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("key=", "key=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
];

/// Shortens a prompt for logging and masks anything that looks like a credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total_chars)
    } else {
        trimmed.to_string()
    };

    redact(&visible)
}

fn redact(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in SENSITIVE_PATTERNS {
        let Some(idx) = result.find(pattern) else {
            continue;
        };
        let value_start = idx + pattern.len();
        let value_end = result[value_start..]
            .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
            .map(|i| value_start + i)
            .unwrap_or(result.len());
        result.replace_range(idx..value_end, replacement);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_blank_prompt_when_sanitizing_then_marks_empty() {
        assert_eq!(sanitize_prompt("   "), "[EMPTY]");
    }

    #[test]
    fn given_long_accented_prompt_when_sanitizing_then_truncates_on_char_boundary() {
        let prompt = "é".repeat(150);

        let sanitized = sanitize_prompt(&prompt);

        assert!(sanitized.starts_with(&"é".repeat(100)));
        assert!(sanitized.ends_with("(150 chars total)"));
    }

    #[test]
    fn given_api_key_in_prompt_when_sanitizing_then_redacts_value() {
        let sanitized = sanitize_prompt("call with key=AIzaSecret now");

        assert_eq!(sanitized, "call with key=[REDACTED] now");
    }
}

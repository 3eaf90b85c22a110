//! Conversion between completion types and the Gemini wire format

use super::types::*;
use crate::completion::TokenUsage;
use crate::message::{Message, MessageRole};

/// Convert messages to Gemini format, returning system instruction separately
pub(crate) fn convert_messages(
    messages: &[Message],
) -> (Option<GeminiContent>, Vec<GeminiContent>) {
    let mut system_instruction = None;
    let mut contents = Vec::new();

    for msg in messages {
        let text = GeminiPart::Text {
            text: msg.content.clone(),
        };
        match msg.role {
            MessageRole::System => {
                system_instruction = Some(GeminiContent {
                    role: None,
                    parts: vec![text],
                });
            }
            MessageRole::User | MessageRole::Assistant if !msg.content.is_empty() => {
                let role = if msg.role == MessageRole::User {
                    "user"
                } else {
                    "model"
                };
                contents.push(GeminiContent {
                    role: Some(role.to_string()),
                    parts: vec![text],
                });
            }
            _ => {}
        }
    }

    (system_instruction, contents)
}

/// Concatenate the text parts of a candidate
pub(crate) fn candidate_text(candidate: &Candidate) -> String {
    candidate
        .content
        .parts
        .iter()
        .filter_map(|part| match part {
            GeminiPart::Text { text } => Some(text.as_str()),
            GeminiPart::Other(_) => None,
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Map usage metadata, counting thinking tokens as completion tokens
pub(crate) fn convert_usage(usage: &UsageMetadata) -> TokenUsage {
    let completion = usage
        .candidates_token_count
        .unwrap_or(0)
        .saturating_add(usage.thoughts_token_count.unwrap_or(0));
    TokenUsage {
        prompt_tokens: usage.prompt_token_count,
        completion_tokens: completion,
        total_tokens: usage
            .total_token_count
            .max(usage.prompt_token_count.saturating_add(completion)),
    }
}

/// Pull a retry delay (seconds) out of a 429 error body
pub(crate) fn parse_retry_delay(detail: &GeminiErrorDetail) -> u64 {
    if let Some(details) = detail.details.as_ref() {
        for entry in details {
            if let Some(delay) = entry.get("retryDelay").and_then(|v| v.as_str()) {
                if let Some(secs) = delay
                    .strip_suffix('s')
                    .and_then(|s| s.split('.').next())
                    .and_then(|s| s.parse::<u64>().ok())
                {
                    return secs;
                }
            }
        }
    }

    // "Your quota will reset after Xs."
    if let Some(pos) = detail.message.find("reset after ") {
        let rest = &detail.message[pos + "reset after ".len()..];
        if let Some(s_pos) = rest.find('s') {
            if let Ok(secs) = rest[..s_pos].trim().parse::<u64>() {
                return secs;
            }
        }
    }

    0
}

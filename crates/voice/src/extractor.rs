//! Model-backed win extraction with a deterministic keyword fallback.
//!
//! The model path asks an Anthropic model to pull accomplishments out of a
//! transcript and answers with zero or more candidates; an empty list is a
//! valid verdict, distinct from a parse failure. Any failure along that
//! path (no credential, transport error, unusable reply) drops to
//! [`fallback_extract`], which answers with exactly one candidate for any
//! non-empty transcript. The count asymmetry is observed client behavior;
//! keep it.

use std::time::Duration;

use serde::Deserialize;

use momentum_core::extraction::{fallback_extract, ExtractedWin};
use momentum_core::goal_area::GoalAreaId;

use crate::VoiceError;

/// Anthropic Messages API endpoint.
pub const ANTHROPIC_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// Model used for extraction.
const EXTRACTION_MODEL: &str = "claude-sonnet-4-20250514";

/// Versioned API header required by the provider.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Reply budget; the structured payload is small.
const MAX_TOKENS: u32 = 1024;

/// Provider hangs are the dominant latency risk; cap every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the win extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Anthropic API key. Absent means the keyword path handles everything.
    pub api_key: Option<String>,
    /// Endpoint override for tests; defaults to [`ANTHROPIC_MESSAGES_URL`].
    pub base_url: String,
    /// Model override; defaults to [`EXTRACTION_MODEL`].
    pub model: String,
}

impl ExtractorConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: ANTHROPIC_MESSAGES_URL.to_string(),
            model: EXTRACTION_MODEL.to_string(),
        }
    }
}

/// Extracts candidate wins from transcripts.
pub struct WinExtractor {
    config: ExtractorConfig,
    http: reqwest::Client,
}

impl WinExtractor {
    pub fn new(config: ExtractorConfig) -> Result<Self, VoiceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, http })
    }

    /// Extract candidate wins from a non-empty transcript.
    ///
    /// Never fails: the model path's errors are logged and recovered by the
    /// keyword path. Callers must not invoke this for blank transcripts;
    /// those mean zero wins without any extraction.
    pub async fn extract(&self, transcript: &str) -> Vec<ExtractedWin> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return fallback_extract(transcript);
        };

        match self.extract_with_model(api_key, transcript).await {
            Ok(wins) => wins,
            Err(err) => {
                tracing::warn!(error = %err, "Model extraction failed, using keyword fallback");
                fallback_extract(transcript)
            }
        }
    }

    async fn extract_with_model(
        &self,
        api_key: &str,
        transcript: &str,
    ) -> Result<Vec<ExtractedWin>, VoiceError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": MAX_TOKENS,
            "messages": [{ "role": "user", "content": extraction_prompt(transcript) }],
        });

        let response = self
            .http
            .post(&self.config.base_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value = response.json().await?;
        let text = payload["content"][0]["text"]
            .as_str()
            .ok_or_else(|| VoiceError::Malformed("reply has no text content".into()))?;

        parse_extraction_reply(text)
    }
}

/// The structured payload the model is instructed to return.
#[derive(Debug, Deserialize)]
struct ExtractionReply {
    #[serde(default)]
    wins: Vec<ExtractedWin>,
}

/// Parse the first structured payload found in a model reply.
///
/// The reply may wrap the JSON in prose; everything from the first `{` to
/// the last `}` is taken as the payload. `{"wins": []}` parses to an empty
/// list, which is a valid result and not an error.
fn parse_extraction_reply(text: &str) -> Result<Vec<ExtractedWin>, VoiceError> {
    let start = text
        .find('{')
        .ok_or_else(|| VoiceError::Malformed("no JSON object in reply".into()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| VoiceError::Malformed("unterminated JSON object in reply".into()))?;

    let reply: ExtractionReply = serde_json::from_str(&text[start..=end])
        .map_err(|err| VoiceError::Malformed(err.to_string()))?;

    Ok(reply.wins)
}

/// Build the extraction instruction around the transcript and the category
/// list.
fn extraction_prompt(transcript: &str) -> String {
    let goal_areas_context = GoalAreaId::ALL
        .iter()
        .map(|area| format!("- {}: {}", area.as_str(), area.canonical_name()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful assistant that extracts personal wins/accomplishments from voice transcripts.\n\
         \n\
         Goal Areas:\n\
         {goal_areas_context}\n\
         \n\
         Transcript: \"{transcript}\"\n\
         \n\
         Extract any wins/accomplishments mentioned. For each win:\n\
         1. Create a concise title (under 50 chars)\n\
         2. Assign to the most appropriate goal area\n\
         3. Rate confidence 0-1 based on how clearly it matches\n\
         \n\
         Respond in JSON format:\n\
         {{\n\
           \"wins\": [\n\
             {{ \"title\": \"...\", \"goalAreaId\": \"...\", \"goalAreaName\": \"...\", \"confidence\": 0.0 }}\n\
           ]\n\
         }}\n\
         \n\
         If no clear wins are found, return {{\"wins\": []}}.\n\
         Only extract actual accomplishments, not intentions or plans."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn reply_with_surrounding_prose_parses() {
        let text = r#"Here you go:
{"wins": [{"title": "Morning Peloton ride", "goalAreaId": "physical_health", "goalAreaName": "Physical Health", "confidence": 0.9}]}
Let me know if you need anything else."#;

        let wins = parse_extraction_reply(text).unwrap();
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].goal_area_id, GoalAreaId::PhysicalHealth);
        assert_eq!(wins[0].confidence, 0.9);
    }

    #[test]
    fn several_wins_survive_parsing() {
        let text = r#"{"wins": [
            {"title": "Shipped the roadmap", "goalAreaId": "work_strategic", "goalAreaName": "Work: Strategic", "confidence": 0.8},
            {"title": "Bedtime story with Ian", "goalAreaId": "family_ian", "goalAreaName": "Family: Ian", "confidence": 0.95}
        ]}"#;

        let wins = parse_extraction_reply(text).unwrap();
        assert_eq!(wins.len(), 2);
    }

    #[test]
    fn zero_wins_is_a_valid_reply_not_an_error() {
        let wins = parse_extraction_reply(r#"{"wins": []}"#).unwrap();
        assert!(wins.is_empty());
    }

    #[test]
    fn missing_wins_key_reads_as_empty() {
        let wins = parse_extraction_reply("{}").unwrap();
        assert!(wins.is_empty());
    }

    #[test]
    fn reply_without_json_is_malformed() {
        assert_matches!(
            parse_extraction_reply("I could not find any wins."),
            Err(VoiceError::Malformed(_))
        );
    }

    #[test]
    fn unknown_goal_area_is_malformed() {
        let text = r#"{"wins": [{"title": "x", "goalAreaId": "side_quests", "goalAreaName": "?", "confidence": 0.5}]}"#;
        assert_matches!(
            parse_extraction_reply(text),
            Err(VoiceError::Malformed(_))
        );
    }

    #[test]
    fn prompt_names_every_goal_area() {
        let prompt = extraction_prompt("did some yoga");
        for area in GoalAreaId::ALL {
            assert!(prompt.contains(area.as_str()));
        }
        assert!(prompt.contains("did some yoga"));
        assert!(prompt.contains("not intentions or plans"));
    }
}

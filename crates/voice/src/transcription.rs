//! Speech-to-text client for Deepgram's pre-recorded transcription API.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::VoiceError;

/// Deepgram pre-recorded transcription endpoint.
pub const DEEPGRAM_LISTEN_URL: &str = "https://api.deepgram.com/v1/listen";

/// Transcription model requested from the provider.
const TRANSCRIPTION_MODEL: &str = "nova-2";

/// Provider hangs are the dominant latency risk; cap every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the transcription client.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// Deepgram API key. Absent means every transcription call fails;
    /// transcription has no local fallback.
    pub api_key: Option<String>,
    /// Endpoint override for tests; defaults to [`DEEPGRAM_LISTEN_URL`].
    pub base_url: String,
}

impl TranscriptionConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEEPGRAM_LISTEN_URL.to_string(),
        }
    }
}

/// Client for a speech-to-text provider.
pub struct TranscriptionClient {
    config: TranscriptionConfig,
    http: reqwest::Client,
}

impl TranscriptionClient {
    pub fn new(config: TranscriptionConfig) -> Result<Self, VoiceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, http })
    }

    /// Whether a credential is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Transcribe raw audio bytes, returning the first channel's best
    /// transcript. Silence legitimately yields an empty string.
    ///
    /// Errors when no credential is configured: this call degrades to
    /// nothing, unlike extraction.
    pub async fn transcribe(&self, audio: Vec<u8>, mime_type: &str) -> Result<String, VoiceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(VoiceError::NotConfigured("Transcription API key"))?;

        let url = format!(
            "{}?model={TRANSCRIPTION_MODEL}&smart_format=true&punctuate=true&utterances=true",
            self.config.base_url
        );

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Token {api_key}"))
            .header(CONTENT_TYPE, mime_type)
            .body(audio)
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
        Ok(best_transcript(&payload))
    }
}

/// Pull the first channel's first alternative out of a Deepgram reply.
/// An absent path is treated as silence, not an error.
fn best_transcript(payload: &serde_json::Value) -> String {
    payload["results"]["channels"][0]["alternatives"][0]["transcript"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

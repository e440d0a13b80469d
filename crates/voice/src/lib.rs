//! External adapters for the voice capture pipeline.
//!
//! Two services sit behind this crate: speech-to-text (Deepgram) and win
//! extraction (Anthropic). Their failure behavior differs on purpose.
//! Transcription has no local fallback and fails loudly; extraction
//! degrades to the deterministic keyword path in `momentum-core`.
//!
//! Credentials are injected at construction. Nothing in this crate reads
//! the process environment.

pub mod extractor;
pub mod transcription;

pub use extractor::{ExtractorConfig, WinExtractor};
pub use transcription::{TranscriptionClient, TranscriptionConfig};

/// Errors from the external voice providers.
#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    /// The adapter has no credential configured.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Transport-level failure talking to the provider.
    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    /// The provider reply could not be interpreted.
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

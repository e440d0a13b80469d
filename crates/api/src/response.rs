//! Shared response envelope for API handlers.
//!
//! Every response is wrapped `{ "success": ..., "data": ... }`; error
//! responses are produced by [`crate::error::AppError`] with a `success:
//! false` body. Use [`ApiResponse::ok`] instead of ad-hoc
//! `serde_json::json!` blocks to keep the envelope consistent.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

//! Remote backend boundary.
//!
//! The website backend owns OTP delivery and order intake; the engine only
//! needs their observable outcomes (a `verified` flag, a confirmation
//! object). Transport implementations live outside this crate; everything
//! here is the trait contract plus the error taxonomy the engine maps user
//! messages from.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::submission::OrderPayload;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never completed (connectivity, timeout). Retryable by
    /// the user, never retried automatically.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The backend answered with something we could not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Confirmation returned by `POST /estimationOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    pub status: String,
}

/// The order-submission and OTP endpoints, as the engine sees them.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// `POST /estimationOrder`.
    async fn submit_order(&self, payload: &OrderPayload)
        -> Result<OrderConfirmation, GatewayError>;

    /// `POST /otp/sendotp`.
    async fn send_otp(&self, phone: &str) -> Result<(), GatewayError>;

    /// `POST /otp/verifyotp`. `Ok(true)` means the code matched.
    async fn verify_otp(&self, phone: &str, code: &str) -> Result<bool, GatewayError>;
}

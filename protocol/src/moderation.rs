//! Pre-moderation queue decisions.
//!
//! The queue itself lives on the server; the SDK only lists it and forwards
//! approve/reject decisions.

use serde::{Deserialize, Serialize};

/// Body of `approve_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveMessageRequest {
    /// `false` rejects the message.
    pub approve: bool,
}

impl ApproveMessageRequest {
    pub fn approve() -> Self {
        Self { approve: true }
    }

    pub fn reject() -> Self {
        Self { approve: false }
    }
}

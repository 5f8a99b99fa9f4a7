//! Contract error types for parking control
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;
use uuid::Uuid;

pub const PLATE_ALREADY_REGISTERED: &str = "plate already registered";
pub const SPOT_ALREADY_IN_USE: &str = "parking spot already in use";
pub const APARTMENT_ALREADY_REGISTERED: &str = "parking spot already registered to that apartment";
pub const STORAGE_CONFLICT: &str = "parking spot conflicts with an existing record";
pub const NOT_FOUND: &str = "parking spot not found";

/// Parking control domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParkingSpotError {
    /// A uniqueness constraint would be violated
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Identifier does not resolve to a live record
    #[error("parking spot not found: {id}")]
    NotFound { id: Uuid },

    /// Payload or pagination parameters are malformed
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Storage unavailable or rejected the operation
    #[error("Internal error")]
    Internal,
}

impl ParkingSpotError {
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

//! Startup error types
//!
//! Validation failures are not errors here — they are response data (see
//! [`routes::developers`](crate::routes::developers)). The only faults this
//! crate can raise are malformed configuration, surfaced before the server
//! starts listening.

use thiserror::Error;

use roster_validator::record::BuildError;
use roster_validator::rules::InvalidBounds;

/// Raised while assembling the application at startup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A length rule was configured with inverted bounds.
    #[error("invalid rule bounds")]
    Bounds(#[from] InvalidBounds),

    /// The record validator configuration is malformed.
    #[error("invalid validator configuration")]
    Build(#[from] BuildError),
}

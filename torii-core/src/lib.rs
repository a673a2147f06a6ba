pub mod identity;
pub mod repository;
pub mod session;

pub use identity::{CredentialVerifier, DemoCredentialVerifier};
pub use repository::{AuctionRepository, PoolRepository, ProfileStore, VehicleRepository};
pub use session::{SessionAction, SessionEvent, SessionManager, SessionState};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFoundError(String),
    #[error("Conflict: {0}")]
    ConflictError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

pub mod models;
pub mod pii;

pub use models::events;
pub use models::user::{SellerRef, User, UserRole};
pub use pii::Masked;

pub mod app_config;
pub mod auction_repo;
pub mod pool_repo;
pub mod profile_store;
pub mod vehicle_repo;

pub use app_config::EngineConfig;
pub use auction_repo::InMemoryAuctionRepository;
pub use pool_repo::InMemoryPoolRepository;
pub use profile_store::{JsonProfileStore, MemoryProfileStore};
pub use vehicle_repo::InMemoryVehicleRepository;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

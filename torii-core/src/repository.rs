use async_trait::async_trait;
use torii_auction::{Auction, ShippingPool};
use torii_catalog::{FilterParams, VehicleSummary};
use torii_shared::User;
use uuid::Uuid;

/// Repository trait for vehicle listing access
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn list(
        &self,
    ) -> Result<Vec<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>>;

    async fn search(
        &self,
        params: &FilterParams,
    ) -> Result<Vec<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>>;

    async fn featured(
        &self,
    ) -> Result<Vec<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for auction access
#[async_trait]
pub trait AuctionRepository: Send + Sync {
    async fn list_live(
        &self,
    ) -> Result<Vec<Auction>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Auction>, Box<dyn std::error::Error + Send + Sync>>;

    /// Place a bid; returns the updated auction
    async fn place_bid(
        &self,
        id: Uuid,
        amount_jpy: i64,
    ) -> Result<Auction, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for shipping pool access
#[async_trait]
pub trait PoolRepository: Send + Sync {
    async fn list_open(
        &self,
    ) -> Result<Vec<ShippingPool>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<ShippingPool>, Box<dyn std::error::Error + Send + Sync>>;

    /// Reserve a slot; returns the updated pool
    async fn reserve_slot(
        &self,
        id: Uuid,
    ) -> Result<ShippingPool, Box<dyn std::error::Error + Send + Sync>>;

    async fn release_slot(
        &self,
        id: Uuid,
    ) -> Result<ShippingPool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Persistence for the current user profile.
///
/// One fixed key, read once when the session starts, rewritten whole on
/// every mutation, removed on logout.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load(&self) -> Result<Option<User>, Box<dyn std::error::Error + Send + Sync>>;

    async fn save(&self, user: &User) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn clear(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

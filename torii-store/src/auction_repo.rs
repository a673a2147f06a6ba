use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use torii_auction::{fixtures, Auction, AuctionBoard, AuctionError};
use torii_core::repository::AuctionRepository;
use uuid::Uuid;

/// Auction repository backed by an in-memory auction board.
///
/// The board is shared behind an `Arc` so the periodic sweeper can run
/// against the same instance the repository serves reads from.
pub struct InMemoryAuctionRepository {
    board: Arc<RwLock<AuctionBoard>>,
}

impl InMemoryAuctionRepository {
    /// Seed one live auction per vehicle id
    pub fn seeded(vehicle_ids: &[Uuid]) -> Self {
        Self::with_auctions(fixtures::mock_auctions(vehicle_ids))
    }

    pub fn with_auctions(auctions: Vec<Auction>) -> Self {
        Self {
            board: Arc::new(RwLock::new(AuctionBoard::with_auctions(auctions))),
        }
    }

    /// Shared board handle, for `spawn_auction_sweeper`
    pub fn board(&self) -> Arc<RwLock<AuctionBoard>> {
        self.board.clone()
    }
}

#[async_trait]
impl AuctionRepository for InMemoryAuctionRepository {
    async fn list_live(
        &self,
    ) -> Result<Vec<Auction>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.board.read().await.live_auctions())
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Auction>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.board.read().await.get(&id).cloned())
    }

    async fn place_bid(
        &self,
        id: Uuid,
        amount_jpy: i64,
    ) -> Result<Auction, Box<dyn std::error::Error + Send + Sync>> {
        let mut board = self.board.write().await;
        board.place_bid(&id, amount_jpy)?;
        board.get(&id).cloned().ok_or_else(|| {
            Box::new(AuctionError::NotFound(id.to_string()))
                as Box<dyn std::error::Error + Send + Sync>
        })
    }
}

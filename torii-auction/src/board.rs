use crate::models::{Auction, AuctionError, AuctionStatus};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};
use torii_shared::events::AuctionEndedEvent;
use uuid::Uuid;

/// Tracks the live auction listings and sweeps the ones whose clock ran out
pub struct AuctionBoard {
    auctions: HashMap<Uuid, Auction>,
}

impl AuctionBoard {
    pub fn new() -> Self {
        Self {
            auctions: HashMap::new(),
        }
    }

    pub fn with_auctions(auctions: Vec<Auction>) -> Self {
        Self {
            auctions: auctions.into_iter().map(|a| (a.id, a)).collect(),
        }
    }

    /// Register an auction on the board
    pub fn add(&mut self, auction: Auction) {
        self.auctions.insert(auction.id, auction);
    }

    /// Get an auction regardless of status
    pub fn get(&self, auction_id: &Uuid) -> Option<&Auction> {
        self.auctions.get(auction_id)
    }

    /// Get an auction only while it accepts bids
    pub fn get_live(&self, auction_id: &Uuid) -> Option<&Auction> {
        self.auctions.get(auction_id).filter(|a| a.is_live())
    }

    /// Place a bid on a board auction
    pub fn place_bid(&mut self, auction_id: &Uuid, amount_jpy: i64) -> Result<(), AuctionError> {
        let auction = self
            .auctions
            .get_mut(auction_id)
            .ok_or_else(|| AuctionError::NotFound(auction_id.to_string()))?;
        auction.place_bid(amount_jpy)
    }

    /// All auctions currently accepting bids, soonest-ending first
    pub fn live_auctions(&self) -> Vec<Auction> {
        let mut live: Vec<Auction> = self
            .auctions
            .values()
            .filter(|a| a.is_live())
            .cloned()
            .collect();
        live.sort_by_key(|a| a.ends_at);
        live
    }

    pub fn live_count(&self) -> usize {
        self.auctions.values().filter(|a| a.is_live()).count()
    }

    /// Mark live auctions whose clock ran out as ended.
    ///
    /// Scheduled, cancelled, and already-ended auctions are left alone.
    /// Returns one event per auction that changed.
    pub fn sweep_ended(&mut self) -> Vec<AuctionEndedEvent> {
        let now = Utc::now();
        let mut events = Vec::new();

        for auction in self.auctions.values_mut() {
            if auction.status == AuctionStatus::Live && auction.ends_at <= now {
                auction.status = AuctionStatus::Ended;
                events.push(AuctionEndedEvent {
                    auction_id: auction.id,
                    vehicle_id: auction.vehicle_id,
                    final_bid_jpy: auction.current_bid_jpy,
                    timestamp: now.timestamp(),
                });
            }
        }

        if !events.is_empty() {
            tracing::info!(count = events.len(), "swept ended auctions");
        }
        events
    }
}

impl Default for AuctionBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the board sweep on a fixed interval until the returned task is
/// aborted. The board keeps serving reads between sweeps.
pub fn spawn_auction_sweeper(
    board: Arc<RwLock<AuctionBoard>>,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        loop {
            ticker.tick().await;
            let events = board.write().await.sweep_ended();
            for event in &events {
                tracing::info!(
                    auction_id = %event.auction_id,
                    final_bid_jpy = event.final_bid_jpy,
                    "auction ended"
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn auction_ending_in(minutes: i64) -> Auction {
        let now = Utc::now();
        Auction::new(
            Uuid::new_v4(),
            1_000_000,
            now - ChronoDuration::hours(1),
            now + ChronoDuration::minutes(minutes),
        )
    }

    #[test]
    fn test_sweep_marks_only_expired_live_auctions() {
        let expired = auction_ending_in(-5);
        let running = auction_ending_in(30);
        let expired_id = expired.id;
        let running_id = running.id;

        let mut board = AuctionBoard::with_auctions(vec![expired, running]);
        assert_eq!(board.live_count(), 1);

        let events = board.sweep_ended();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].auction_id, expired_id);

        assert_eq!(board.get(&expired_id).unwrap().status, AuctionStatus::Ended);
        assert_eq!(board.get(&running_id).unwrap().status, AuctionStatus::Live);

        // A second sweep finds nothing new
        assert!(board.sweep_ended().is_empty());
    }

    #[test]
    fn test_ended_auction_not_retrievable_as_live() {
        let expired = auction_ending_in(-1);
        let id = expired.id;
        let board = AuctionBoard::with_auctions(vec![expired]);

        assert!(board.get_live(&id).is_none());
        assert!(board.get(&id).is_some());
    }

    #[test]
    fn test_board_bid_routes_to_auction() {
        let auction = auction_ending_in(10);
        let id = auction.id;
        let mut board = AuctionBoard::with_auctions(vec![auction]);

        board.place_bid(&id, 1_500_000).expect("bid accepted");
        assert_eq!(board.get(&id).unwrap().current_bid_jpy, 1_500_000);

        let missing = Uuid::new_v4();
        assert!(matches!(
            board.place_bid(&missing, 2_000_000),
            Err(AuctionError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_sweeper_task_marks_expired() {
        let expired = auction_ending_in(-5);
        let id = expired.id;
        let board = Arc::new(RwLock::new(AuctionBoard::with_auctions(vec![expired])));

        let task = spawn_auction_sweeper(board.clone(), Duration::from_millis(10));

        // First sweep fires on the immediate initial tick
        let mut swept = false;
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(5)).await;
            if board.read().await.get(&id).unwrap().status == AuctionStatus::Ended {
                swept = true;
                break;
            }
        }
        task.abort();
        assert!(swept);
    }
}

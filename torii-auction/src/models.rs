use crate::countdown::{Countdown, Remaining};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Auction lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuctionStatus {
    Scheduled,
    Live,
    Ended,
    Cancelled,
}

/// A timed auction for a single vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub current_bid_jpy: i64,
    pub bid_count: u32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: AuctionStatus,
}

impl Auction {
    pub fn new(
        vehicle_id: Uuid,
        opening_bid_jpy: i64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        let status = if starts_at > Utc::now() {
            AuctionStatus::Scheduled
        } else {
            AuctionStatus::Live
        };
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            current_bid_jpy: opening_bid_jpy,
            bid_count: 0,
            starts_at,
            ends_at,
            status,
        }
    }

    /// Check if the clock has run out
    pub fn is_ended(&self) -> bool {
        Utc::now() >= self.ends_at
    }

    /// Check if the auction accepts bids right now
    pub fn is_live(&self) -> bool {
        self.status == AuctionStatus::Live && !self.is_ended()
    }

    /// Remaining time on the auction clock
    pub fn time_remaining(&self) -> Remaining {
        Countdown::new(self.ends_at).remaining()
    }

    /// Place a bid. Bids must strictly increase the current price and land
    /// while the auction is live.
    pub fn place_bid(&mut self, amount_jpy: i64) -> Result<(), AuctionError> {
        if !self.is_live() {
            return Err(AuctionError::NotLive(self.id.to_string()));
        }
        if amount_jpy <= self.current_bid_jpy {
            return Err(AuctionError::BidTooLow {
                offered: amount_jpy,
                current: self.current_bid_jpy,
            });
        }

        self.current_bid_jpy = amount_jpy;
        self.bid_count += 1;
        tracing::debug!(auction_id = %self.id, amount_jpy, "bid placed");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuctionError {
    #[error("Auction not found: {0}")]
    NotFound(String),

    #[error("Auction is not live: {0}")]
    NotLive(String),

    #[error("Bid of {offered} does not beat current bid of {current}")]
    BidTooLow { offered: i64, current: i64 },
}

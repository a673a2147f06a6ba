use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use torii_finance::Destination;
use torii_shared::events::PoolSlotReservedEvent;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoolStatus {
    Open,
    Full,
    Departed,
}

/// A consolidated container shipment shared by several buyers.
///
/// Pooling splits the container cost across slots; a pool's per-slot rate
/// is what the cost calculator receives as the pooled shipping amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingPool {
    pub id: Uuid,
    pub origin_port: String,
    pub destination: Destination,
    pub departs_at: DateTime<Utc>,
    pub capacity: u32,
    pub occupied: u32,
    pub per_slot_cost_usd: f64,
    pub status: PoolStatus,
}

impl ShippingPool {
    pub fn new(
        origin_port: String,
        destination: Destination,
        departs_at: DateTime<Utc>,
        capacity: u32,
        per_slot_cost_usd: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin_port,
            destination,
            departs_at,
            capacity,
            occupied: 0,
            per_slot_cost_usd,
            status: PoolStatus::Open,
        }
    }

    pub fn slots_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.occupied)
    }

    /// Reserve one slot for a vehicle.
    pub fn reserve_slot(&mut self) -> Result<PoolSlotReservedEvent, PoolError> {
        match self.status {
            PoolStatus::Departed => return Err(PoolError::Departed(self.id.to_string())),
            PoolStatus::Full => {
                return Err(PoolError::Full {
                    capacity: self.capacity,
                })
            }
            PoolStatus::Open => {}
        }

        self.occupied += 1;
        if self.occupied == self.capacity {
            self.status = PoolStatus::Full;
        }

        tracing::debug!(
            pool_id = %self.id,
            occupied = self.occupied,
            capacity = self.capacity,
            "pool slot reserved"
        );

        Ok(PoolSlotReservedEvent {
            pool_id: self.id,
            occupied: self.occupied,
            capacity: self.capacity,
            timestamp: Utc::now().timestamp(),
        })
    }

    /// Release a previously reserved slot (buyer backed out).
    pub fn release_slot(&mut self) -> Result<(), PoolError> {
        if self.status == PoolStatus::Departed {
            return Err(PoolError::Departed(self.id.to_string()));
        }
        if self.occupied == 0 {
            return Err(PoolError::NothingReserved(self.id.to_string()));
        }

        self.occupied -= 1;
        if self.status == PoolStatus::Full {
            self.status = PoolStatus::Open;
        }
        Ok(())
    }

    /// Mark the pool as sailed; its slot roster is frozen
    pub fn mark_departed(&mut self) {
        self.status = PoolStatus::Departed;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("Pool not found: {0}")]
    NotFound(String),

    #[error("Pool is full: capacity {capacity}")]
    Full { capacity: u32 },

    #[error("Pool has already departed: {0}")]
    Departed(String),

    #[error("Pool has no reserved slots to release: {0}")]
    NothingReserved(String),
}

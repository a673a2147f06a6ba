use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use torii_auction::{fixtures, PoolError, PoolStatus, ShippingPool};
use torii_core::repository::PoolRepository;
use uuid::Uuid;

/// Shipping pool repository over the in-memory demo pools
pub struct InMemoryPoolRepository {
    pools: RwLock<HashMap<Uuid, ShippingPool>>,
}

impl InMemoryPoolRepository {
    /// Seed from the demo fixture pools
    pub fn new() -> Self {
        Self::with_pools(fixtures::mock_pools())
    }

    pub fn with_pools(pools: Vec<ShippingPool>) -> Self {
        Self {
            pools: RwLock::new(pools.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

impl Default for InMemoryPoolRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PoolRepository for InMemoryPoolRepository {
    async fn list_open(
        &self,
    ) -> Result<Vec<ShippingPool>, Box<dyn std::error::Error + Send + Sync>> {
        let pools = self.pools.read().await;
        let mut open: Vec<ShippingPool> = pools
            .values()
            .filter(|p| p.status == PoolStatus::Open)
            .cloned()
            .collect();
        open.sort_by_key(|p| p.departs_at);
        Ok(open)
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<ShippingPool>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.pools.read().await.get(&id).cloned())
    }

    async fn reserve_slot(
        &self,
        id: Uuid,
    ) -> Result<ShippingPool, Box<dyn std::error::Error + Send + Sync>> {
        let mut pools = self.pools.write().await;
        let pool = pools
            .get_mut(&id)
            .ok_or_else(|| Box::new(PoolError::NotFound(id.to_string())) as Box<dyn std::error::Error + Send + Sync>)?;
        pool.reserve_slot()?;
        Ok(pool.clone())
    }

    async fn release_slot(
        &self,
        id: Uuid,
    ) -> Result<ShippingPool, Box<dyn std::error::Error + Send + Sync>> {
        let mut pools = self.pools.write().await;
        let pool = pools
            .get_mut(&id)
            .ok_or_else(|| Box::new(PoolError::NotFound(id.to_string())) as Box<dyn std::error::Error + Send + Sync>)?;
        pool.release_slot()?;
        Ok(pool.clone())
    }
}

use async_trait::async_trait;
use tokio::sync::RwLock;
use torii_catalog::{filter_vehicles, fixtures, FilterParams, VehicleSummary};
use torii_core::repository::VehicleRepository;
use uuid::Uuid;

/// Vehicle repository over the in-memory mock catalog.
///
/// Listings are immutable once seeded; the lock exists so the repository
/// can be shared across tasks, not because records change.
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<Vec<VehicleSummary>>,
}

impl InMemoryVehicleRepository {
    /// Seed from the demo fixture set
    pub fn new() -> Self {
        Self::with_vehicles(fixtures::mock_vehicles())
    }

    /// Seed from caller-supplied listings (tests inject their own)
    pub fn with_vehicles(vehicles: Vec<VehicleSummary>) -> Self {
        Self {
            vehicles: RwLock::new(vehicles),
        }
    }
}

impl Default for InMemoryVehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn list(
        &self,
    ) -> Result<Vec<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.vehicles.read().await.clone())
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .vehicles
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn search(
        &self,
        params: &FilterParams,
    ) -> Result<Vec<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>> {
        let vehicles = self.vehicles.read().await;
        Ok(filter_vehicles(&vehicles, params))
    }

    async fn featured(
        &self,
    ) -> Result<Vec<VehicleSummary>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self
            .vehicles
            .read()
            .await
            .iter()
            .filter(|v| v.featured)
            .cloned()
            .collect())
    }
}

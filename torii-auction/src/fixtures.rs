//! Mock auction and shipping-pool data for the demo environment.

use crate::models::Auction;
use crate::pool::ShippingPool;
use chrono::{Duration, Utc};
use torii_finance::Destination;
use uuid::Uuid;

/// Seed one live auction per given vehicle, with staggered closing times.
pub fn mock_auctions(vehicle_ids: &[Uuid]) -> Vec<Auction> {
    let now = Utc::now();
    vehicle_ids
        .iter()
        .enumerate()
        .map(|(i, vehicle_id)| {
            Auction::new(
                *vehicle_id,
                800_000 + (i as i64) * 350_000,
                now - Duration::hours(2),
                now + Duration::hours(6 + 3 * i as i64),
            )
        })
        .collect()
}

/// Seed the demo shipping pools: one per destination out of Yokohama.
pub fn mock_pools() -> Vec<ShippingPool> {
    let now = Utc::now();
    vec![
        ShippingPool::new(
            "Yokohama".to_string(),
            Destination::Usa,
            now + Duration::days(12),
            4,
            1_100.0,
        ),
        ShippingPool::new(
            "Yokohama".to_string(),
            Destination::Canada,
            now + Duration::days(19),
            6,
            950.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_auctions_are_live() {
        let vehicle_ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let auctions = mock_auctions(&vehicle_ids);

        assert_eq!(auctions.len(), 3);
        for (auction, vehicle_id) in auctions.iter().zip(&vehicle_ids) {
            assert!(auction.is_live());
            assert_eq!(auction.vehicle_id, *vehicle_id);
        }
    }

    #[test]
    fn test_mock_pools_cover_both_destinations() {
        let pools = mock_pools();
        assert!(pools.iter().any(|p| p.destination == Destination::Usa));
        assert!(pools.iter().any(|p| p.destination == Destination::Canada));
        assert!(pools.iter().all(|p| p.slots_remaining() > 0));
    }
}

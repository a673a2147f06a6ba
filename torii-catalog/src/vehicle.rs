use serde::{Deserialize, Serialize};
use torii_shared::SellerRef;
use uuid::Uuid;

/// Overall vehicle condition grade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    Mint,
    Excellent,
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Transmission {
    Manual,
    Automatic,
}

/// A vehicle listing as shown in browse and search results.
///
/// Records are created once at fixture load and never mutated; every
/// consumer works on clones handed out by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleSummary {
    pub id: Uuid,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub mileage_km: u32,
    pub condition: Condition,
    /// Hammer/asking price in Japan, whole yen
    pub jp_price_jpy: i64,
    /// Estimated landed cost in the buyer's currency, whole USD
    pub estimated_landed_cost_usd: i64,
    pub transmission: Transmission,
    pub primary_image: String,
    pub seller: SellerRef,
    pub featured: bool,
}

impl VehicleSummary {
    /// Display label, e.g. "1994 Toyota Supra RZ"
    pub fn label(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_serde_names() {
        let json = serde_json::to_string(&Condition::Excellent).expect("serialize");
        assert_eq!(json, "\"EXCELLENT\"");

        let back: Condition = serde_json::from_str("\"MINT\"").expect("deserialize");
        assert_eq!(back, Condition::Mint);
    }

    #[test]
    fn test_condition_ordering() {
        // Grades order from best to worst
        assert!(Condition::Mint < Condition::Poor);
        assert!(Condition::Excellent < Condition::Good);
    }
}

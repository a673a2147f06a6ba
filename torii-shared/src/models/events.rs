use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct FavoriteToggledEvent {
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub favorited: bool,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CartChangedEvent {
    pub user_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub change: CartChange,
    pub cart_size: usize,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartChange {
    Added,
    Removed,
    Cleared,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct AuctionEndedEvent {
    pub auction_id: Uuid,
    pub vehicle_id: Uuid,
    pub final_bid_jpy: i64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct PoolSlotReservedEvent {
    pub pool_id: Uuid,
    pub occupied: u32,
    pub capacity: u32,
    pub timestamp: i64,
}

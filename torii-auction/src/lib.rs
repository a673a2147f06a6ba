pub mod board;
pub mod countdown;
pub mod fixtures;
pub mod models;
pub mod pool;

pub use board::{spawn_auction_sweeper, AuctionBoard};
pub use countdown::{spawn_countdown, Countdown, CountdownHandle, Remaining};
pub use models::{Auction, AuctionError, AuctionStatus};
pub use pool::{PoolError, PoolStatus, ShippingPool};

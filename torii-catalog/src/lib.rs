pub mod filter;
pub mod fixtures;
pub mod vehicle;

pub use filter::{filter_vehicles, FilterParams, SortKey};
pub use vehicle::{Condition, Transmission, VehicleSummary};

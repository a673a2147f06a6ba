pub mod fees;
pub mod financing;
pub mod import_cost;

pub use fees::{Destination, FeeSchedule};
pub use financing::{monthly_payment, FinancingQuote, FinancingRequest};
pub use import_cost::{CostBreakdown, ImportCostCalculator, ImportQuoteRequest};

/// Finance-related errors
#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    #[error("Amount must not be negative: {field} = {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("Loan term must be at least one month")]
    ZeroTerm,

    #[error("Down payment {down_payment} exceeds vehicle price {vehicle_price}")]
    DownPaymentExceedsPrice {
        down_payment: f64,
        vehicle_price: f64,
    },
}

pub type FinanceResult<T> = Result<T, FinanceError>;

/// Round to two decimal places (cents)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

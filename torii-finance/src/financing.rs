use crate::{round2, FinanceError, FinanceResult};
use serde::{Deserialize, Serialize};

/// Inputs for a loan estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingRequest {
    pub vehicle_price: f64,
    pub down_payment: f64,
    /// Annual percentage rate, e.g. 7.5 for 7.5%
    pub apr: f64,
    pub term_months: u32,
}

/// Amortized loan estimate, rounded to cents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancingQuote {
    pub payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Compute the monthly payment on an amortizing loan.
///
/// Uses `payment = principal * r / (1 - (1 + r)^-n)` with the monthly rate
/// `r = apr / 100 / 12`. A zero APR degenerates to straight division, which
/// the formula cannot express (r = 0 divides by zero).
pub fn monthly_payment(request: &FinancingRequest) -> FinanceResult<FinancingQuote> {
    if request.vehicle_price < 0.0 {
        return Err(FinanceError::NegativeAmount {
            field: "vehicle_price",
            value: request.vehicle_price,
        });
    }
    if request.down_payment < 0.0 {
        return Err(FinanceError::NegativeAmount {
            field: "down_payment",
            value: request.down_payment,
        });
    }
    if request.apr < 0.0 {
        return Err(FinanceError::NegativeAmount {
            field: "apr",
            value: request.apr,
        });
    }
    if request.term_months == 0 {
        return Err(FinanceError::ZeroTerm);
    }
    if request.down_payment > request.vehicle_price {
        return Err(FinanceError::DownPaymentExceedsPrice {
            down_payment: request.down_payment,
            vehicle_price: request.vehicle_price,
        });
    }

    let principal = request.vehicle_price - request.down_payment;
    let n = request.term_months as f64;

    let payment = if request.apr == 0.0 {
        principal / n
    } else {
        let r = request.apr / 100.0 / 12.0;
        principal * r / (1.0 - (1.0 + r).powf(-n))
    };

    let payment = round2(payment);
    let total_paid = round2(payment * n);
    let total_interest = round2(total_paid - principal);

    Ok(FinancingQuote {
        payment,
        total_paid,
        total_interest,
    })
}

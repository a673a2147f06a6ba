use crate::fees::{Destination, FeeSchedule};
use crate::{round2, FinanceError, FinanceResult};
use serde::{Deserialize, Serialize};

/// Inputs for an import cost quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportQuoteRequest {
    /// Vehicle purchase price, USD
    pub vehicle_price: f64,
    pub destination: Destination,
    /// Ship in a consolidated pool instead of an individual container
    pub use_pool: bool,
    /// Per-slot cost of the chosen pool; falls back to the schedule default
    pub pool_cost: Option<f64>,
    /// Comparable local-market price, for the savings line
    pub local_market_price: Option<f64>,
}

/// Itemized landed-cost estimate.
///
/// `total` is always the exact sum of the component fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub vehicle_cost: f64,
    pub japan_export_fee: f64,
    pub shipping: f64,
    pub port_fees: f64,
    pub customs_brokerage: f64,
    pub import_duty: f64,
    pub registration: f64,
    pub taxes: f64,
    pub total: f64,
    pub savings_vs_local: Option<f64>,
}

impl CostBreakdown {
    /// Sum of the component fields, recomputed from scratch
    pub fn component_sum(&self) -> f64 {
        self.vehicle_cost
            + self.japan_export_fee
            + self.shipping
            + self.port_fees
            + self.customs_brokerage
            + self.import_duty
            + self.registration
            + self.taxes
    }
}

/// Quotes landed costs from a fee schedule
pub struct ImportCostCalculator {
    schedule: FeeSchedule,
}

impl ImportCostCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Produce an itemized quote for one vehicle.
    ///
    /// Export fee and duty are fractions of the vehicle price; shipping is
    /// the pool slot rate when pooled, else the individual container rate;
    /// taxes apply to the dutiable base (price + export fee + duty) at the
    /// destination rate. Negative amounts are rejected.
    pub fn quote(&self, request: &ImportQuoteRequest) -> FinanceResult<CostBreakdown> {
        if request.vehicle_price < 0.0 {
            return Err(FinanceError::NegativeAmount {
                field: "vehicle_price",
                value: request.vehicle_price,
            });
        }
        if let Some(pool_cost) = request.pool_cost {
            if pool_cost < 0.0 {
                return Err(FinanceError::NegativeAmount {
                    field: "pool_cost",
                    value: pool_cost,
                });
            }
        }

        let schedule = &self.schedule;
        let vehicle_cost = request.vehicle_price;
        let japan_export_fee = vehicle_cost * schedule.export_fee_rate;
        let import_duty = vehicle_cost * schedule.import_duty_rate;

        let shipping = if request.use_pool {
            request.pool_cost.unwrap_or(schedule.default_pool_shipping)
        } else {
            schedule.individual_shipping
        };

        let registration = schedule.registration(request.destination);
        let taxable_base = vehicle_cost + japan_export_fee + import_duty;
        let taxes = taxable_base * schedule.tax_rate(request.destination);

        let total = vehicle_cost
            + japan_export_fee
            + shipping
            + schedule.port_fees
            + schedule.customs_brokerage
            + import_duty
            + registration
            + taxes;

        let savings_vs_local = request
            .local_market_price
            .filter(|local| *local > total)
            .map(|local| round2(local - total));

        tracing::debug!(
            destination = ?request.destination,
            use_pool = request.use_pool,
            total,
            "quoted import cost"
        );

        Ok(CostBreakdown {
            vehicle_cost,
            japan_export_fee,
            shipping,
            port_fees: schedule.port_fees,
            customs_brokerage: schedule.customs_brokerage,
            import_duty,
            registration,
            taxes,
            total,
            savings_vs_local,
        })
    }
}

impl Default for ImportCostCalculator {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pooled_request(destination: Destination) -> ImportQuoteRequest {
        ImportQuoteRequest {
            vehicle_price: 50_000.0,
            destination,
            use_pool: true,
            pool_cost: Some(1_100.0),
            local_market_price: None,
        }
    }

    #[test]
    fn test_usa_pooled_quote() {
        let calculator = ImportCostCalculator::default();
        let breakdown = calculator
            .quote(&pooled_request(Destination::Usa))
            .expect("quote");

        assert_eq!(breakdown.japan_export_fee, 9_000.0);
        assert_eq!(breakdown.import_duty, 6_000.0);
        assert_eq!(breakdown.shipping, 1_100.0);
        assert_eq!(breakdown.port_fees, 400.0);
        assert_eq!(breakdown.customs_brokerage, 300.0);
        assert_eq!(breakdown.registration, 350.0);
        assert_eq!(breakdown.taxes, 5_200.0);
        assert_eq!(breakdown.total, 72_350.0);
    }

    #[test]
    fn test_canada_differs_only_in_taxes() {
        let calculator = ImportCostCalculator::default();
        let usa = calculator
            .quote(&pooled_request(Destination::Usa))
            .expect("usa quote");
        let canada = calculator
            .quote(&pooled_request(Destination::Canada))
            .expect("canada quote");

        assert_eq!(canada.taxes, 65_000.0 * 0.13);
        assert_eq!(canada.japan_export_fee, usa.japan_export_fee);
        assert_eq!(canada.import_duty, usa.import_duty);
        assert_eq!(canada.shipping, usa.shipping);
        assert_eq!(canada.registration, usa.registration);
        assert!(canada.total > usa.total);
    }

    #[test]
    fn test_total_is_component_sum() {
        let calculator = ImportCostCalculator::default();
        for price in [0.0, 1_234.56, 50_000.0, 250_000.0] {
            let breakdown = calculator
                .quote(&ImportQuoteRequest {
                    vehicle_price: price,
                    destination: Destination::Canada,
                    use_pool: false,
                    pool_cost: None,
                    local_market_price: None,
                })
                .expect("quote");
            assert!((breakdown.total - breakdown.component_sum()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_pool_flag_selects_shipping_source() {
        let calculator = ImportCostCalculator::default();

        let pooled_default = calculator
            .quote(&ImportQuoteRequest {
                vehicle_price: 10_000.0,
                destination: Destination::Usa,
                use_pool: true,
                pool_cost: None,
                local_market_price: None,
            })
            .expect("pooled quote");
        assert_eq!(pooled_default.shipping, 1_100.0);

        let individual = calculator
            .quote(&ImportQuoteRequest {
                vehicle_price: 10_000.0,
                destination: Destination::Usa,
                use_pool: false,
                pool_cost: Some(900.0),
                local_market_price: None,
            })
            .expect("individual quote");
        // Pool cost is ignored unless the pool flag is set
        assert_eq!(individual.shipping, 1_800.0);
    }

    #[test]
    fn test_savings_only_when_local_is_higher() {
        let calculator = ImportCostCalculator::default();

        let mut request = pooled_request(Destination::Usa);
        request.local_market_price = Some(90_000.0);
        let breakdown = calculator.quote(&request).expect("quote");
        assert_eq!(breakdown.savings_vs_local, Some(17_650.0));

        request.local_market_price = Some(60_000.0);
        let breakdown = calculator.quote(&request).expect("quote");
        assert_eq!(breakdown.savings_vs_local, None);
    }

    #[test]
    fn test_negative_price_rejected() {
        let calculator = ImportCostCalculator::default();
        let result = calculator.quote(&ImportQuoteRequest {
            vehicle_price: -1.0,
            destination: Destination::Usa,
            use_pool: false,
            pool_cost: None,
            local_market_price: None,
        });
        assert!(matches!(
            result,
            Err(FinanceError::NegativeAmount {
                field: "vehicle_price",
                ..
            })
        ));
    }
}

use serde::{Deserialize, Serialize};

/// Destination countries the marketplace ships to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Usa,
    Canada,
}

/// Fee rates and flat charges applied when quoting an import.
///
/// Every field has a default so a schedule deserialized from a partial
/// config file (or no file at all) is complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Japan-side export fee, as a fraction of the vehicle price
    #[serde(default = "default_export_fee_rate")]
    pub export_fee_rate: f64,

    /// Import duty, as a fraction of the vehicle price
    #[serde(default = "default_import_duty_rate")]
    pub import_duty_rate: f64,

    /// Flat port handling fees, USD
    #[serde(default = "default_port_fees")]
    pub port_fees: f64,

    /// Flat customs brokerage, USD
    #[serde(default = "default_customs_brokerage")]
    pub customs_brokerage: f64,

    /// Registration charge when landing in the USA, USD
    #[serde(default = "default_registration")]
    pub registration_usa: f64,

    /// Registration charge when landing in Canada, USD
    #[serde(default = "default_registration")]
    pub registration_canada: f64,

    /// Flat rate for an individual (non-pooled) container shipment, USD
    #[serde(default = "default_individual_shipping")]
    pub individual_shipping: f64,

    /// Per-slot rate assumed when a pooled quote does not name a pool, USD
    #[serde(default = "default_pool_shipping")]
    pub default_pool_shipping: f64,

    /// Sales/use tax rate for USA imports
    #[serde(default = "default_tax_rate_usa")]
    pub tax_rate_usa: f64,

    /// Combined tax rate for Canada imports
    #[serde(default = "default_tax_rate_canada")]
    pub tax_rate_canada: f64,
}

fn default_export_fee_rate() -> f64 {
    0.18
}

fn default_import_duty_rate() -> f64 {
    0.12
}

fn default_port_fees() -> f64 {
    400.0
}

fn default_customs_brokerage() -> f64 {
    300.0
}

fn default_registration() -> f64 {
    350.0
}

fn default_individual_shipping() -> f64 {
    1800.0
}

fn default_pool_shipping() -> f64 {
    1100.0
}

fn default_tax_rate_usa() -> f64 {
    0.08
}

fn default_tax_rate_canada() -> f64 {
    0.13
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            export_fee_rate: default_export_fee_rate(),
            import_duty_rate: default_import_duty_rate(),
            port_fees: default_port_fees(),
            customs_brokerage: default_customs_brokerage(),
            registration_usa: default_registration(),
            registration_canada: default_registration(),
            individual_shipping: default_individual_shipping(),
            default_pool_shipping: default_pool_shipping(),
            tax_rate_usa: default_tax_rate_usa(),
            tax_rate_canada: default_tax_rate_canada(),
        }
    }
}

impl FeeSchedule {
    pub fn tax_rate(&self, destination: Destination) -> f64 {
        match destination {
            Destination::Usa => self.tax_rate_usa,
            Destination::Canada => self.tax_rate_canada,
        }
    }

    // Both destinations currently resolve to the same default amount; the
    // fields are configured independently.
    pub fn registration(&self, destination: Destination) -> f64 {
        match destination {
            Destination::Usa => self.registration_usa,
            Destination::Canada => self.registration_canada,
        }
    }
}

use serde::Deserialize;
use std::env;
use torii_core::identity::DemoCredentialVerifier;
use torii_finance::FeeSchedule;
use torii_shared::{User, UserRole};

/// Engine-wide configuration.
///
/// Every section has working defaults, so `load()` succeeds with no config
/// files present at all; files and `TORII_*` environment variables layer
/// overrides on top.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub fees: FeeSchedule,
    #[serde(default)]
    pub demo: DemoAccountConfig,
    #[serde(default)]
    pub auction: AuctionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoAccountConfig {
    #[serde(default = "default_demo_name")]
    pub name: String,
    #[serde(default = "default_demo_email")]
    pub email: String,
    #[serde(default = "default_demo_password")]
    pub password: String,
    #[serde(default = "default_demo_location")]
    pub location: String,
}

fn default_demo_name() -> String {
    "Demo Buyer".to_string()
}

fn default_demo_email() -> String {
    "demo@torii.example".to_string()
}

fn default_demo_password() -> String {
    "torii-demo".to_string()
}

fn default_demo_location() -> String {
    "Seattle, WA".to_string()
}

impl Default for DemoAccountConfig {
    fn default() -> Self {
        Self {
            name: default_demo_name(),
            email: default_demo_email(),
            password: default_demo_password(),
            location: default_demo_location(),
        }
    }
}

impl DemoAccountConfig {
    /// Build the credential verifier for the configured demo account
    pub fn verifier(&self) -> DemoCredentialVerifier {
        let mut profile = User::new(self.name.clone(), self.email.clone(), UserRole::Buyer);
        profile.location = Some(self.location.clone());
        DemoCredentialVerifier::new(profile, self.password.clone())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuctionConfig {
    /// How often the board sweeps ended auctions
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

fn default_sweep_interval() -> u64 {
    30
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

impl EngineConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration file, if the deployment ships one
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // TORII_FEES__PORT_FEES=450 style environment overrides
            .add_source(config::Environment::with_prefix("TORII").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torii_finance::Destination;

    #[test]
    fn test_load_without_files_falls_back_to_defaults() {
        let cfg = EngineConfig::load().expect("load");
        assert_eq!(cfg.fees.export_fee_rate, 0.18);
        assert_eq!(cfg.fees.default_pool_shipping, 1_100.0);
    }

    #[test]
    fn test_defaults_are_complete() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.fees.port_fees, 400.0);
        assert_eq!(cfg.fees.tax_rate(Destination::Usa), 0.08);
        assert_eq!(cfg.demo.email, "demo@torii.example");
        assert_eq!(cfg.auction.sweep_interval_seconds, 30);
    }

    #[tokio::test]
    async fn test_configured_verifier_accepts_demo_account() {
        use torii_core::identity::CredentialVerifier;

        let cfg = EngineConfig::default();
        let verifier = cfg.demo.verifier();
        assert!(verifier.verify(&cfg.demo.email, &cfg.demo.password).await);

        let profile = verifier
            .profile_for(&cfg.demo.email)
            .await
            .expect("demo profile");
        assert_eq!(profile.location.as_deref(), Some("Seattle, WA"));
    }
}

//! Mock catalog data.
//!
//! The demo environment has no upstream inventory feed; this module seeds
//! the in-memory repository with a fixed set of listings. Nothing outside
//! the repository layer should reach for these directly.

use crate::vehicle::{Condition, Transmission, VehicleSummary};
use torii_shared::SellerRef;
use uuid::Uuid;

fn seller(name: &str, rating: f64, verified: bool) -> SellerRef {
    SellerRef {
        id: Uuid::new_v4(),
        name: name.to_string(),
        rating,
        verified,
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    year: i32,
    make: &str,
    model: &str,
    mileage_km: u32,
    condition: Condition,
    jp_price_jpy: i64,
    estimated_landed_cost_usd: i64,
    transmission: Transmission,
    seller: SellerRef,
    featured: bool,
) -> VehicleSummary {
    VehicleSummary {
        id: Uuid::new_v4(),
        year,
        make: make.to_string(),
        model: model.to_string(),
        mileage_km,
        condition,
        jp_price_jpy,
        estimated_landed_cost_usd,
        transmission,
        primary_image: format!(
            "https://img.torii.example/{}-{}.jpg",
            make.to_lowercase(),
            model.to_lowercase().replace(' ', "-")
        ),
        seller,
        featured,
    }
}

/// The demo listing set: mixed makes, grades, and price points.
pub fn mock_vehicles() -> Vec<VehicleSummary> {
    let osaka_export = seller("Osaka Export Co.", 4.8, true);
    let nagoya_classics = seller("Nagoya Classics", 4.5, true);
    let chiba_motors = seller("Chiba Motors", 4.1, false);

    vec![
        vehicle(
            1994,
            "Toyota",
            "Supra RZ",
            87_000,
            Condition::Excellent,
            6_800_000,
            58_400,
            Transmission::Manual,
            osaka_export.clone(),
            true,
        ),
        vehicle(
            1999,
            "Nissan",
            "Skyline GT-R V-Spec",
            64_000,
            Condition::Mint,
            12_500_000,
            104_200,
            Transmission::Manual,
            osaka_export.clone(),
            true,
        ),
        vehicle(
            1992,
            "Mazda",
            "RX-7 Type R",
            112_000,
            Condition::Good,
            3_900_000,
            34_800,
            Transmission::Manual,
            nagoya_classics.clone(),
            false,
        ),
        vehicle(
            1997,
            "Honda",
            "NSX",
            58_000,
            Condition::Excellent,
            9_800_000,
            82_600,
            Transmission::Manual,
            nagoya_classics.clone(),
            true,
        ),
        vehicle(
            1995,
            "Toyota",
            "Sprinter Trueno GT-APEX",
            154_000,
            Condition::Fair,
            1_850_000,
            17_900,
            Transmission::Manual,
            chiba_motors.clone(),
            false,
        ),
        vehicle(
            1998,
            "Subaru",
            "Impreza WRX STI",
            98_000,
            Condition::Good,
            2_700_000,
            24_500,
            Transmission::Manual,
            chiba_motors.clone(),
            false,
        ),
        vehicle(
            1996,
            "Mitsubishi",
            "Lancer Evolution IV",
            121_000,
            Condition::Good,
            2_450_000,
            22_300,
            Transmission::Manual,
            nagoya_classics.clone(),
            false,
        ),
        vehicle(
            2001,
            "Honda",
            "Civic Type R",
            76_000,
            Condition::Excellent,
            2_100_000,
            19_600,
            Transmission::Manual,
            chiba_motors,
            false,
        ),
        vehicle(
            1995,
            "Nissan",
            "Silvia K's",
            143_000,
            Condition::Poor,
            980_000,
            9_800,
            Transmission::Automatic,
            nagoya_classics,
            false,
        ),
        vehicle(
            1993,
            "Toyota",
            "Land Cruiser 80",
            188_000,
            Condition::Fair,
            2_300_000,
            21_400,
            Transmission::Automatic,
            osaka_export,
            false,
        ),
    ]
}

use crate::vehicle::{Condition, Transmission, VehicleSummary};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sort orders accepted by the browse surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    YearAsc,
    YearDesc,
    MileageAsc,
}

impl SortKey {
    /// Parse a query-string sort value. Unknown values yield `None`,
    /// which leaves the result order unchanged.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "year-asc" => Some(SortKey::YearAsc),
            "year-desc" => Some(SortKey::YearDesc),
            "mileage-asc" => Some(SortKey::MileageAsc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::YearAsc => "year-asc",
            SortKey::YearDesc => "year-desc",
            SortKey::MileageAsc => "mileage-asc",
        }
    }
}

/// Filter and sort parameters for a catalog search.
///
/// Every field is optional; an absent field leaves that dimension
/// unconstrained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub condition: Option<Condition>,
    pub transmission: Option<Transmission>,
    pub sort: Option<SortKey>,
}

impl FilterParams {
    /// Build params from raw form/query input.
    ///
    /// Numeric values that fail to parse fall back to defaults instead of
    /// surfacing an error: prices become unconstrained, a bad `year` falls
    /// back to 1999. Unknown keys are ignored.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        let mut params = Self::default();

        if let Some(make) = query.get("make") {
            params.make = Some(make.clone());
        }
        if let Some(model) = query.get("model") {
            params.model = Some(model.clone());
        }
        if let Some(year) = query.get("year") {
            params.year = Some(year.parse().unwrap_or(1999));
        }
        if let Some(min) = query.get("min_price") {
            params.min_price = min.parse().ok();
        }
        if let Some(max) = query.get("max_price") {
            params.max_price = max.parse().ok();
        }
        if let Some(condition) = query.get("condition") {
            params.condition = serde_json::from_value(serde_json::Value::String(
                condition.to_uppercase(),
            ))
            .ok();
        }
        if let Some(transmission) = query.get("transmission") {
            params.transmission = serde_json::from_value(serde_json::Value::String(
                transmission.to_uppercase(),
            ))
            .ok();
        }
        if let Some(sort) = query.get("sort") {
            params.sort = SortKey::parse(sort);
        }

        params
    }

    fn matches(&self, vehicle: &VehicleSummary) -> bool {
        if let Some(make) = &self.make {
            if !contains_ci(&vehicle.make, make) {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if !contains_ci(&vehicle.model, model) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if vehicle.year != year {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if vehicle.estimated_landed_cost_usd < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if vehicle.estimated_landed_cost_usd > max {
                return false;
            }
        }
        if let Some(condition) = self.condition {
            if vehicle.condition != condition {
                return false;
            }
        }
        if let Some(transmission) = self.transmission {
            if vehicle.transmission != transmission {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring containment
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter and sort a list of vehicles.
///
/// The input slice is never mutated; the result is a fresh `Vec`. Filtering
/// preserves input order, and sorting uses the stable sort, so records that
/// compare equal keep their relative order and sorting is idempotent.
pub fn filter_vehicles(vehicles: &[VehicleSummary], params: &FilterParams) -> Vec<VehicleSummary> {
    let mut result: Vec<VehicleSummary> = vehicles
        .iter()
        .filter(|v| params.matches(v))
        .cloned()
        .collect();

    if let Some(sort) = params.sort {
        match sort {
            SortKey::PriceAsc => {
                result.sort_by_key(|v| v.estimated_landed_cost_usd);
            }
            SortKey::PriceDesc => {
                result.sort_by_key(|v| std::cmp::Reverse(v.estimated_landed_cost_usd));
            }
            SortKey::YearAsc => {
                result.sort_by_key(|v| v.year);
            }
            SortKey::YearDesc => {
                result.sort_by_key(|v| std::cmp::Reverse(v.year));
            }
            SortKey::MileageAsc => {
                result.sort_by_key(|v| v.mileage_km);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::mock_vehicles;

    #[test]
    fn test_make_filter_is_case_insensitive() {
        let vehicles = mock_vehicles();
        let params = FilterParams {
            make: Some("toyota".to_string()),
            ..Default::default()
        };

        let result = filter_vehicles(&vehicles, &params);
        assert!(!result.is_empty());
        for vehicle in &result {
            assert_eq!(vehicle.make.to_lowercase(), "toyota");
        }

        let expected = vehicles
            .iter()
            .filter(|v| v.make.to_lowercase().contains("toyota"))
            .count();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let vehicles = mock_vehicles();
        let probe = vehicles[0].estimated_landed_cost_usd;
        let params = FilterParams {
            min_price: Some(probe),
            max_price: Some(probe),
            ..Default::default()
        };

        let result = filter_vehicles(&vehicles, &params);
        assert!(result
            .iter()
            .all(|v| v.estimated_landed_cost_usd == probe));
        assert!(result.iter().any(|v| v.id == vehicles[0].id));
    }

    #[test]
    fn test_price_sort_ascending_and_idempotent() {
        let vehicles = mock_vehicles();
        let params = FilterParams {
            sort: Some(SortKey::PriceAsc),
            ..Default::default()
        };

        let sorted = filter_vehicles(&vehicles, &params);
        for pair in sorted.windows(2) {
            assert!(pair[0].estimated_landed_cost_usd <= pair[1].estimated_landed_cost_usd);
        }

        let twice = filter_vehicles(&sorted, &params);
        assert_eq!(sorted, twice);
    }

    #[test]
    fn test_unknown_sort_preserves_order() {
        let vehicles = mock_vehicles();
        let params = FilterParams {
            sort: SortKey::parse("alphabetical"),
            ..Default::default()
        };
        assert!(params.sort.is_none());

        let result = filter_vehicles(&vehicles, &params);
        assert_eq!(result, vehicles);
    }

    #[test]
    fn test_input_not_mutated() {
        let vehicles = mock_vehicles();
        let snapshot = vehicles.clone();
        let params = FilterParams {
            sort: Some(SortKey::PriceDesc),
            ..Default::default()
        };

        let _ = filter_vehicles(&vehicles, &params);
        assert_eq!(vehicles, snapshot);
    }

    #[test]
    fn test_from_query_year_fallback() {
        let mut query = HashMap::new();
        query.insert("year".to_string(), "not-a-year".to_string());
        query.insert("min_price".to_string(), "abc".to_string());
        query.insert("sort".to_string(), "price-asc".to_string());

        let params = FilterParams::from_query(&query);
        assert_eq!(params.year, Some(1999));
        assert_eq!(params.min_price, None);
        assert_eq!(params.sort, Some(SortKey::PriceAsc));
    }

    #[test]
    fn test_condition_and_transmission_filters() {
        let vehicles = mock_vehicles();
        let params = FilterParams {
            condition: Some(Condition::Excellent),
            transmission: Some(Transmission::Manual),
            ..Default::default()
        };

        let result = filter_vehicles(&vehicles, &params);
        for vehicle in &result {
            assert_eq!(vehicle.condition, Condition::Excellent);
            assert_eq!(vehicle.transmission, Transmission::Manual);
        }
    }
}

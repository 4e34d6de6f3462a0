//! Route quoting and per-class pricing.
//!
//! Distances are placeholders derived from the place names until a routing
//! service is wired in: every pair of names maps to a fixed leg length, so a
//! quote only ever depends on its arguments.

use xxhash_rust::xxh32::xxh32;

use crate::entities::{PriceQuote, RouteRequest, VehicleClass};

pub const BASE_FARE: f64 = 20.0;
pub const RATE_PER_KM: f64 = 8.0;
pub const STOP_FEE: f64 = 10.0;
pub const MINIMUM_FARE: f64 = 30.0;

const LEG_SEED: u32 = 0x5eed;

#[tracing::instrument]
pub fn quote(pickup: &str, destination: &str, stops: &[String]) -> PriceQuote {
    let route = RouteRequest::new(pickup, destination, stops.to_vec());

    quote_route(&route)
}

/// Direct leg from pickup to destination plus one detour leg per stop.
pub fn quote_route(route: &RouteRequest) -> PriceQuote {
    if route.pickup.is_empty() || route.destination.is_empty() {
        return PriceQuote {
            total_distance: 0.0,
            total_price: MINIMUM_FARE,
        };
    }

    let mut total_distance = leg_distance(&route.pickup, &route.destination);
    let mut previous = route.pickup.as_str();

    for stop in route.stops.iter() {
        total_distance += leg_distance(previous, stop);
        previous = stop;
    }

    let total_distance = round_to_tenth(total_distance);
    let fare = BASE_FARE + RATE_PER_KM * total_distance + STOP_FEE * route.stops.len() as f64;

    PriceQuote {
        total_distance,
        total_price: round_half_up(fare.max(MINIMUM_FARE)),
    }
}

pub fn price_for_class(base_price: f64, class: VehicleClass) -> f64 {
    round_half_up(clamp_amount(base_price) * class.multiplier())
}

/// Maps NaN, infinite and negative amounts to zero.
pub fn clamp_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Rounds to the nearest whole currency unit, halves going up.
pub fn round_half_up(amount: f64) -> f64 {
    (clamp_amount(amount) + 0.5).floor()
}

// 1.0 to 15.9 km for distinct named places, 0 otherwise. Symmetric.
fn leg_distance(from: &str, to: &str) -> f64 {
    let from = from.trim().to_lowercase();
    let to = to.trim().to_lowercase();

    if from.is_empty() || to.is_empty() || from == to {
        return 0.0;
    }

    let (first, second) = if from <= to { (from, to) } else { (to, from) };
    let key = format!("{}\u{1f}{}", first, second);
    let tenths = xxh32(key.as_bytes(), LEG_SEED) % 150;

    1.0 + tenths as f64 / 10.0
}

fn round_to_tenth(distance: f64) -> f64 {
    (distance * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn quote_is_deterministic() {
        let first = quote("Sandton", "Rosebank", &stops(&["Melville"]));
        let second = quote("Sandton", "Rosebank", &stops(&["Melville"]));

        assert_eq!(first, second);
    }

    #[test]
    fn distance_never_shrinks_as_stops_are_added() {
        let all = stops(&["Braamfontein", "Melville", "Parkhurst", "Greenside", "Randburg"]);

        let mut previous = quote("Sandton", "Rosebank", &[]);
        for n in 1..=all.len() {
            let current = quote("Sandton", "Rosebank", &all[..n]);

            assert!(current.total_distance >= previous.total_distance);
            assert!(current.total_price >= previous.total_price);
            previous = current;
        }
    }

    #[test]
    fn empty_locations_quote_minimum_fare() {
        let quote = quote("", "Rosebank", &stops(&["Melville"]));

        assert_eq!(quote.total_distance, 0.0);
        assert_eq!(quote.total_price, MINIMUM_FARE);
    }

    #[test]
    fn legs_are_bounded_and_symmetric() {
        let there = leg_distance("Sandton", "Rosebank");
        let back = leg_distance("rosebank", " SANDTON ");

        assert_eq!(there, back);
        assert!((1.0..16.0).contains(&there));
        assert_eq!(leg_distance("Sandton", "sandton"), 0.0);
    }

    #[test]
    fn quoted_price_is_whole_and_at_least_minimum_fare() {
        let quote = quote("A", "B", &[]);

        assert!(quote.total_price >= MINIMUM_FARE);
        assert_eq!(quote.total_price, quote.total_price.floor());
    }

    #[test]
    fn price_for_class_applies_multiplier_and_rounds_half_up() {
        assert_eq!(price_for_class(100.0, VehicleClass::Car), 100.0);
        assert_eq!(price_for_class(100.0, VehicleClass::Motorbike), 80.0);
        assert_eq!(price_for_class(45.0, VehicleClass::Comfort), 59.0);
        assert_eq!(price_for_class(65.0, VehicleClass::Bicycle), 39.0);
        assert_eq!(price_for_class(12.5, VehicleClass::Car), 13.0);
    }

    #[test]
    fn price_for_class_clamps_degenerate_input() {
        assert_eq!(price_for_class(f64::NAN, VehicleClass::Xl), 0.0);
        assert_eq!(price_for_class(-40.0, VehicleClass::Car), 0.0);
        assert_eq!(price_for_class(f64::INFINITY, VehicleClass::Car), 0.0);
    }
}

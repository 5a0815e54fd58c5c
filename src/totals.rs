//! Flight aggregation: counts and monetary totals derived from a fully
//! populated accumulator.

use crate::flight::{Flight, Route};

/// Count and monetary totals for one flight, computed once after the whole
/// file has been read. Counts are `u64`; monetary figures are 128-bit so a
/// grammar-valid manifest with near-`u64::MAX` route numbers still totals
/// exactly (a `u64` field times an in-memory passenger count stays well
/// below `i128::MAX`). `adjusted_revenue` is signed because redemptions and
/// airline-channel exclusions can push it below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub total_passengers_count: u64,
    pub general_passengers_count: u64,
    pub airline_passengers_count: u64,
    pub loyalty_passenger_count: u64,
    pub baggage_count: u64,
    pub loyalty_points_redeemed: u128,
    pub total_cost_of_flight: u128,
    pub total_revenue: u128,
    pub adjusted_revenue: i128,
}

/// Derive all totals from the accumulated passenger lists and the route
/// economics. Counts come first, then the monetary figures built on them.
pub fn aggregate(flight: &Flight, route: &Route) -> Totals {
    let total_passengers_count =
        (flight.passengers.len() + flight.loyalty_passengers.len()) as u64;
    let general_passengers_count =
        flight.passengers.iter().filter(|p| p.is_general).count() as u64;
    let airline_passengers_count =
        flight.passengers.iter().filter(|p| !p.is_general).count() as u64;
    let loyalty_passenger_count = flight.loyalty_passengers.len() as u64;

    // One bag per person plus one extra per opted-in loyalty passenger.
    let baggage_count = total_passengers_count
        + flight
            .loyalty_passengers
            .iter()
            .filter(|lp| lp.using_extra_baggage)
            .count() as u64;

    let loyalty_points_redeemed: u128 = flight
        .loyalty_passengers
        .iter()
        .filter(|lp| lp.using_loyalty_points)
        .map(|lp| lp.current_loyalty_points as u128)
        .sum();

    let total_cost_of_flight =
        route.cost_per_passenger as u128 * total_passengers_count as u128;
    let total_revenue = route.ticket_price as u128 * total_passengers_count as u128;

    // Airline-channel tickets and redeemed points (valued 1:1 as currency)
    // are excluded from the revenue the eligibility check sees.
    let adjusted_revenue = total_revenue as i128
        - loyalty_points_redeemed as i128
        - airline_passengers_count as i128 * route.ticket_price as i128;

    Totals {
        total_passengers_count,
        general_passengers_count,
        airline_passengers_count,
        loyalty_passenger_count,
        baggage_count,
        loyalty_points_redeemed,
        total_cost_of_flight,
        total_revenue,
        adjusted_revenue,
    }
}

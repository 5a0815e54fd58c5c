//! Takeoff eligibility: three independent pass/fail checks and their
//! combination.

use crate::flight::{Aircraft, Route};
use crate::totals::Totals;

/// Outcome of the eligibility checks. Each predicate is exposed on its own;
/// `can_proceed` is their conjunction.
#[derive(Debug, Clone, PartialEq)]
pub struct Eligibility {
    /// Booked fraction of capacity (not yet scaled to percent).
    pub percentage_booked: f64,
    pub meets_seats: bool,
    pub meets_revenue: bool,
    pub meets_percentage: bool,
    pub can_proceed: bool,
}

/// Evaluate all three predicates. Every predicate is computed even when an
/// earlier one already fails, since each is individually exposed.
///
/// Both monetary and load checks are strict: break-even revenue fails, and
/// a load exactly on the threshold fails. A zero-seat aircraft yields a NaN
/// `percentage_booked`, which fails the load check the same way the legacy
/// arithmetic did.
pub fn evaluate(totals: &Totals, route: &Route, aircraft: &Aircraft) -> Eligibility {
    let percentage_booked =
        totals.total_passengers_count as f64 / aircraft.number_of_seats as f64;
    let meets_seats = totals.total_passengers_count <= aircraft.number_of_seats;
    // Cost is a u64 field times an in-memory count, so it fits i128 exactly.
    let meets_revenue = (totals.total_cost_of_flight as i128) < totals.adjusted_revenue;
    let meets_percentage =
        percentage_booked * 100.0 > route.minimum_takeoff_load_percentage as f64;
    let can_proceed = meets_revenue && meets_percentage && meets_seats;

    Eligibility {
        percentage_booked,
        meets_seats,
        meets_revenue,
        meets_percentage,
        can_proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(count: u64, cost: u128, revenue: u128, adjusted: i128) -> Totals {
        Totals {
            total_passengers_count: count,
            general_passengers_count: count,
            airline_passengers_count: 0,
            loyalty_passenger_count: 0,
            baggage_count: count,
            loyalty_points_redeemed: 0,
            total_cost_of_flight: cost,
            total_revenue: revenue,
            adjusted_revenue: adjusted,
        }
    }

    fn route(minimum: u64) -> Route {
        Route {
            origin: "LON".to_string(),
            destination: "PAR".to_string(),
            cost_per_passenger: 50,
            ticket_price: 100,
            minimum_takeoff_load_percentage: minimum,
        }
    }

    fn aircraft(seats: u64) -> Aircraft {
        Aircraft {
            title: "A320".to_string(),
            number_of_seats: seats,
        }
    }

    #[test]
    fn full_aircraft_over_threshold_proceeds() {
        let e = evaluate(&totals(2, 100, 200, 200), &route(60), &aircraft(2));
        assert!(e.meets_seats);
        assert!(e.meets_revenue);
        assert!(e.meets_percentage);
        assert!(e.can_proceed);
        assert!((e.percentage_booked - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn break_even_revenue_fails_the_strict_check() {
        let e = evaluate(&totals(2, 200, 200, 200), &route(60), &aircraft(4));
        assert!(!e.meets_revenue);
        assert!(!e.can_proceed);
    }

    #[test]
    fn exact_load_threshold_fails_the_strict_check() {
        // 3 of 5 seats = 60%, not strictly greater than 60.
        let e = evaluate(&totals(3, 100, 300, 300), &route(60), &aircraft(5));
        assert!(!e.meets_percentage);
        assert!(!e.can_proceed);
    }

    #[test]
    fn overbooked_flight_fails_seats() {
        let e = evaluate(&totals(3, 100, 300, 300), &route(60), &aircraft(2));
        assert!(!e.meets_seats);
        assert!(!e.can_proceed);
        // The other predicates are still computed.
        assert!(e.meets_revenue);
        assert!(e.meets_percentage);
    }

    #[test]
    fn negative_adjusted_revenue_fails_revenue() {
        let e = evaluate(&totals(1, 50, 100, -400), &route(60), &aircraft(2));
        assert!(!e.meets_revenue);
    }

    #[test]
    fn huge_cost_fails_revenue_without_overflow() {
        let e = evaluate(
            &totals(2, 19_999_999_999_999_999_998, 200, 200),
            &route(60),
            &aircraft(2),
        );
        assert!(!e.meets_revenue);
        assert!(!e.can_proceed);
    }

    #[test]
    fn zero_seat_aircraft_fails_percentage_without_panicking() {
        let e = evaluate(&totals(0, 0, 0, 0), &route(60), &aircraft(0));
        assert!(e.percentage_booked.is_nan());
        assert!(!e.meets_percentage);
        assert!(!e.can_proceed);
    }
}

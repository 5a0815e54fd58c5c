//! Whole-file driver: scan, collect errors, then aggregate and decide.
//!
//! The entire file is always scanned so the operator sees every bad line in
//! one pass. Aggregation, evaluation, and formatting run only when the scan
//! produced zero errors.

use crate::eligibility::{Eligibility, evaluate};
use crate::error::{FlightError, Section};
use crate::flight::Flight;
use crate::grammar;
use crate::totals::{Totals, aggregate};

/// Process one manifest and produce the summary line.
///
/// On success returns the ten-token summary exactly as it should be written
/// to the output file (no trailing newline). On failure returns every error
/// collected over the whole file, in line order.
pub fn process_manifest(input: &str) -> Result<String, Vec<FlightError>> {
    let mut flight = Flight::new();
    let mut errors = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_number = idx + 1;
        let result = grammar::validate(line, line_number)
            .and_then(|fields| flight.apply(&fields, line_number));
        if let Err(err) = result {
            errors.push(err);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Presence check before aggregation; a manifest without a route or
    // aircraft gets clean errors instead of a downstream fault. Both gaps
    // are reported together, same one-pass policy as the line scan.
    match (&flight.route, &flight.aircraft) {
        (Some(route), Some(aircraft)) => {
            let totals = aggregate(&flight, route);
            let eligibility = evaluate(&totals, route, aircraft);
            Ok(format_summary(&totals, &eligibility))
        }
        (route, aircraft) => {
            if route.is_none() {
                errors.push(FlightError::Missing {
                    section: Section::Route,
                });
            }
            if aircraft.is_none() {
                errors.push(FlightError::Missing {
                    section: Section::Aircraft,
                });
            }
            Err(errors)
        }
    }
}

/// Render the summary line: nine decimal fields then TRUE or FALSE.
pub fn format_summary(totals: &Totals, eligibility: &Eligibility) -> String {
    format!(
        "{} {} {} {} {} {} {} {} {} {}",
        totals.total_passengers_count,
        totals.general_passengers_count,
        totals.airline_passengers_count,
        totals.loyalty_passenger_count,
        totals.baggage_count,
        totals.loyalty_points_redeemed,
        totals.total_cost_of_flight,
        totals.total_revenue,
        totals.adjusted_revenue,
        if eligibility.can_proceed {
            "TRUE"
        } else {
            "FALSE"
        }
    )
}

//! Instruction line grammar.
//!
//! Validation is two-stage: a coarse pattern classifies the instruction kind,
//! then a precise per-kind pattern checks the exact field layout. The split
//! exists so a bad line gets an error message describing the shape of the
//! kind it was trying to be, not a generic rejection.
//!
//! Both stages search unanchored, so leading or trailing garbage around a
//! valid instruction substring is tolerated. This matches the legacy grammar
//! exactly and is pinned by tests; do not anchor without deciding to change
//! observable behavior.

use crate::error::FlightError;
use regex::Regex;
use std::sync::LazyLock;

/// Coarse classifier: does the line contain any known instruction at all?
static CLASSIFY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(add)\s(route|aircraft|general|airline|loyalty)").unwrap());

static ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(add)\s(route)\s([a-zA-Z]+)\s([a-zA-Z]+)\s(\d+)\s(\d+)\s(\d+)").unwrap()
});

static AIRCRAFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(add)\s(aircraft)\s(\S+)\s(\d+)").unwrap());

static LOYALTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(add)\s(loyalty)\s([a-zA-Z]+)\s(\d{1,3})\s(\d+)\s(TRUE|FALSE)\s(TRUE|FALSE)")
        .unwrap()
});

static PASSENGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(add)\s(general|airline)\s(\S+)\s(\d{1,3})").unwrap());

pub(crate) const ROUTE_SHAPE: &str = "A route must meet the format 'add route origin destination cost-per-passenger(n) ticket-price(n) minimum-takeoff-load-percentage(n)'.";
pub(crate) const AIRCRAFT_SHAPE: &str =
    "An aircraft must meet the format 'add aircraft aircraft-title number-of-seats(n)'.";
pub(crate) const LOYALTY_SHAPE: &str = "An loyalty passenger must meet the format 'add loyalty first-name age(n) current-loyalty-points(n) using-loyalty-points(b) using-extra-baggage(b)'.";
pub(crate) const PASSENGER_SHAPE: &str =
    "A passenger must meet the format 'add (general|airline) first-name age(n)'.";

/// Validate one raw line against the instruction grammar.
///
/// On success returns the capture groups in order, with index 0 holding the
/// whole match, index 2 the instruction kind, and the kind-specific fields
/// from index 3 on. On failure returns a `Classification` error (no known
/// kind found) or a kind-specific `Format` error.
pub fn validate(line: &str, line_number: usize) -> Result<Vec<String>, FlightError> {
    let Some(kind) = CLASSIFY.captures(line) else {
        return Err(FlightError::Classification { line: line_number });
    };

    let (pattern, shape): (&Regex, &'static str) = match &kind[2] {
        "route" => (&ROUTE, ROUTE_SHAPE),
        "aircraft" => (&AIRCRAFT, AIRCRAFT_SHAPE),
        "loyalty" => (&LOYALTY, LOYALTY_SHAPE),
        // general and airline share one passenger shape
        _ => (&PASSENGER, PASSENGER_SHAPE),
    };

    match pattern.captures(line) {
        Some(caps) => Ok(caps
            .iter()
            .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect()),
        None => Err(FlightError::Format {
            line: line_number,
            expected: shape,
        }),
    }
}

//! Flight accumulator and the instruction parser that populates it.
//!
//! A `Flight` is built up line by line from validated instruction fields and
//! owns everything downstream stages need: the once-only `route` and
//! `aircraft` sections plus the append-only passenger lists.

use crate::error::{FlightError, Section};
use crate::grammar;
use std::str::FromStr;

/// Origin/destination and the per-passenger economics of the flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub cost_per_passenger: u64,
    pub ticket_price: u64,
    pub minimum_takeoff_load_percentage: u64,
}

/// The aircraft assigned to the flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aircraft {
    pub title: String,
    pub number_of_seats: u64,
}

/// A non-loyalty passenger. `is_general` distinguishes the booking channel:
/// true for `general` instructions, false for `airline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub first_name: String,
    pub age: u16,
    pub is_general: bool,
}

/// A loyalty-program passenger with a points balance and two opt-in flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoyaltyPassenger {
    pub passenger: Passenger,
    pub current_loyalty_points: u64,
    pub using_loyalty_points: bool,
    pub using_extra_baggage: bool,
}

/// The single per-run accumulator. Created empty, populated line by line,
/// read once at end of file.
#[derive(Debug, Default)]
pub struct Flight {
    pub route: Option<Route>,
    pub aircraft: Option<Aircraft>,
    pub passengers: Vec<Passenger>,
    pub loyalty_passengers: Vec<LoyaltyPassenger>,
}

/// Convert one captured field, reporting overflow as the same format error
/// the grammar would have raised for that kind.
fn field<T: FromStr>(raw: &str, line: usize, expected: &'static str) -> Result<T, FlightError> {
    raw.parse()
        .map_err(|_| FlightError::Format { line, expected })
}

impl Flight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one validated instruction into the accumulator.
    ///
    /// `fields` must be the capture sequence returned by
    /// [`grammar::validate`]: kind at index 2, kind-specific fields from
    /// index 3. Fails with `Duplicate` on a second `route` or `aircraft`.
    pub fn apply(&mut self, fields: &[String], line_number: usize) -> Result<(), FlightError> {
        match fields[2].as_str() {
            "route" => {
                if self.route.is_some() {
                    return Err(FlightError::Duplicate {
                        line: line_number,
                        section: Section::Route,
                    });
                }
                self.route = Some(Route {
                    origin: fields[3].clone(),
                    destination: fields[4].clone(),
                    cost_per_passenger: field(&fields[5], line_number, grammar::ROUTE_SHAPE)?,
                    ticket_price: field(&fields[6], line_number, grammar::ROUTE_SHAPE)?,
                    minimum_takeoff_load_percentage: field(
                        &fields[7],
                        line_number,
                        grammar::ROUTE_SHAPE,
                    )?,
                });
            }
            "aircraft" => {
                if self.aircraft.is_some() {
                    return Err(FlightError::Duplicate {
                        line: line_number,
                        section: Section::Aircraft,
                    });
                }
                self.aircraft = Some(Aircraft {
                    title: fields[3].clone(),
                    number_of_seats: field(&fields[4], line_number, grammar::AIRCRAFT_SHAPE)?,
                });
            }
            "loyalty" => {
                self.loyalty_passengers.push(LoyaltyPassenger {
                    passenger: Passenger {
                        first_name: fields[3].clone(),
                        age: field(&fields[4], line_number, grammar::LOYALTY_SHAPE)?,
                        is_general: false,
                    },
                    current_loyalty_points: field(&fields[5], line_number, grammar::LOYALTY_SHAPE)?,
                    using_loyalty_points: fields[6] == "TRUE",
                    using_extra_baggage: fields[7] == "TRUE",
                });
            }
            kind => {
                self.passengers.push(Passenger {
                    first_name: fields[3].clone(),
                    age: field(&fields[4], line_number, grammar::PASSENGER_SHAPE)?,
                    is_general: kind == "general",
                });
            }
        }
        Ok(())
    }
}

//! # flight-check
//!
//! A flight manifest instruction parser and takeoff eligibility checker.
//!
//! A manifest is a line-oriented instruction file: each line is an
//! `add <kind> ...` directive describing the flight's route, its aircraft,
//! or one passenger. The library validates every line, folds the
//! instructions into a single [`Flight`] accumulator, derives count and
//! monetary [`Totals`], applies the three takeoff checks (seats, revenue,
//! load percentage), and renders a one-line summary.
//!
//! ## Instruction kinds
//!
//! ```text
//! add route <origin> <destination> <cost> <price> <min-load-%>
//! add aircraft <title> <seats>
//! add general <first-name> <age>
//! add airline <first-name> <age>
//! add loyalty <first-name> <age> <points> <TRUE|FALSE> <TRUE|FALSE>
//! ```
//!
//! `route` and `aircraft` may each appear at most once. The whole file is
//! always scanned; a summary is produced only when every line is valid.
//!
//! ## Example
//!
//! ```
//! use flight_check::process_manifest;
//!
//! let manifest = "add route LON PAR 50 100 60\n\
//!                 add aircraft A320 2\n\
//!                 add general Alice 30\n\
//!                 add general Bob 40";
//!
//! let summary = process_manifest(manifest).unwrap();
//! assert_eq!(summary, "2 2 0 0 2 0 100 200 200 TRUE");
//! ```

pub mod eligibility;
pub mod error;
pub mod flight;
pub mod grammar;
pub mod runner;
pub mod totals;

pub use eligibility::{Eligibility, evaluate};
pub use error::{FlightError, Section};
pub use flight::{Aircraft, Flight, LoyaltyPassenger, Passenger, Route};
pub use grammar::validate;
pub use runner::{format_summary, process_manifest};
pub use totals::{Totals, aggregate};

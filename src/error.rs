//! Error types for instruction validation and parsing.
//!
//! Each error carries enough context to render the exact operator-facing
//! message on its own; the driver collects them into a list rather than
//! stopping at the first failure.

use std::fmt;
use thiserror::Error;

/// The two once-only sections of a flight definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Route,
    Aircraft,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Route => write!(f, "route"),
            Section::Aircraft => write!(f, "aircraft"),
        }
    }
}

/// A validation or parse failure for one instruction line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlightError {
    /// Line does not contain any known `add <kind>` instruction.
    #[error(
        "Invalid instruction line ({line}). Only 'add route|aircraft|general|airline|loyalty' are permitted as a valid instruction."
    )]
    Classification { line: usize },

    /// Line was classified as a kind but fails that kind's field grammar.
    #[error("Invalid instruction line ({line}). {expected}")]
    Format { line: usize, expected: &'static str },

    /// A second `route` or `aircraft` instruction appeared.
    #[error("Line {line}. Flight {section} already defined.")]
    Duplicate { line: usize, section: Section },

    /// The file never defined a `route` or `aircraft` section.
    #[error("Flight {section} not defined.")]
    Missing { section: Section },
}

//! Fixed-width table rendering for flight listings.

use std::fmt::Write as _;

use crate::flight::Flight;

/// Message printed in place of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "No flights found.";

const NO_WIDTH: usize = 4;
const DESTINATION_WIDTH: usize = 30;
const DATE_WIDTH: usize = 20;
const AIRCRAFT_WIDTH: usize = 8;

/// Render flights as a bordered table, numbering rows from 1.
///
/// Returns [`EMPTY_MESSAGE`] when `flights` yields nothing. Every line,
/// including the last, ends with a newline.
#[must_use]
pub fn render<'a>(flights: impl IntoIterator<Item = &'a Flight>) -> String {
    let mut flights = flights.into_iter().peekable();
    if flights.peek().is_none() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let border = border_line();
    let mut out = String::new();

    out.push_str(&border);
    let _ = writeln!(
        out,
        "| {:^NO_WIDTH$} | {:^DESTINATION_WIDTH$} | {:^DATE_WIDTH$} | {:^AIRCRAFT_WIDTH$} |",
        "No", "Destination", "Departure Date", "Aircraft Type"
    );
    out.push_str(&border);

    for (idx, flight) in flights.enumerate() {
        let _ = writeln!(
            out,
            "| {:>NO_WIDTH$} | {:<DESTINATION_WIDTH$} | {:<DATE_WIDTH$} | {:>AIRCRAFT_WIDTH$} |",
            idx + 1,
            flight.destination,
            flight.departure_date,
            flight.aircraft_type
        );
        out.push_str(&border);
    }

    out
}

fn border_line() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+\n",
        "-".repeat(NO_WIDTH),
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(DATE_WIDTH),
        "-".repeat(AIRCRAFT_WIDTH)
    )
}

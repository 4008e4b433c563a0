//! Seating report: one row per occupied seat.

use crate::model::{Person, Seat};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Name shown when a seat references a person no longer on the roster.
pub const UNKNOWN_OCCUPANT: &str = "Unknown";

const HEADERS: [&str; 5] = ["Seat", "Name", "Title", "Organization", "Category"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub seat_label: String,
    pub name: String,
    pub title: String,
    pub organization: String,
    pub category: String,
}

impl ReportRow {
    fn cells(&self) -> [&str; 5] {
        [
            self.seat_label.as_str(),
            self.name.as_str(),
            self.title.as_str(),
            self.organization.as_str(),
            self.category.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SeatingReport {
    pub rows: Vec<ReportRow>,
}

impl SeatingReport {
    /// Lists every occupied seat, ordered by label.
    ///
    /// Numeric labels come first in numeric order, the rest follow
    /// lexically. Dangling occupant ids render as [`UNKNOWN_OCCUPANT`].
    pub fn build(seats: &[Seat], people: &[Person]) -> Self {
        let mut rows: Vec<ReportRow> = seats
            .iter()
            .filter_map(|seat| seat.occupant.map(|id| (seat, id)))
            .map(|(seat, id)| match people.iter().find(|p| p.id == id) {
                Some(person) => ReportRow {
                    seat_label: seat.label.clone(),
                    name: person.name.clone(),
                    title: person.title.clone(),
                    organization: person.organization.clone(),
                    category: person.category.clone(),
                },
                None => ReportRow {
                    seat_label: seat.label.clone(),
                    name: UNKNOWN_OCCUPANT.to_string(),
                    title: String::new(),
                    organization: String::new(),
                    category: String::new(),
                },
            })
            .collect();

        rows.sort_by(|a, b| compare_labels(&a.seat_label, &b.seat_label));
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

impl fmt::Display for SeatingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No seats assigned");
        }

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let write_line = |f: &mut fmt::Formatter<'_>, cells: [&str; 5]| -> fmt::Result {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            writeln!(f, "{}", padded.join(" | ").trim_end())
        };

        write_line(f, HEADERS)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &self.rows {
            write_line(f, row.cells())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatkit_core::PersonId;

    fn occupied(label: &str, person: PersonId) -> Seat {
        let mut seat = Seat::new_seat(0.0, 0.0, 100.0, 150.0, label, 1);
        seat.occupant = Some(person);
        seat
    }

    #[test]
    fn test_rows_sorted_numerically_then_lexically() {
        let a = Person::new("Ada", "Director", "Agency", "Guest", 10);
        let b = Person::new("Bo", "Clerk", "Office", "Staff", 0);
        let seats = vec![
            occupied("10", a.id),
            occupied("VIP", PersonId::new()),
            occupied("2", b.id),
            Seat::new_seat(0.0, 0.0, 100.0, 150.0, "1", 1),
        ];
        let report = SeatingReport::build(&seats, &[a, b]);
        let labels: Vec<&str> = report.rows.iter().map(|r| r.seat_label.as_str()).collect();
        assert_eq!(labels, vec!["2", "10", "VIP"]);
        assert_eq!(report.rows[0].name, "Bo");
        assert_eq!(report.rows[2].name, UNKNOWN_OCCUPANT);
    }

    #[test]
    fn test_render_table() {
        let a = Person::new("Ada", "Director", "Agency", "Guest", 10);
        let report = SeatingReport::build(&[occupied("1", a.id)], &[a]);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Seat | Name"));
        assert!(lines[2].contains("Ada"));
        assert!(lines[2].contains("Director"));
    }

    #[test]
    fn test_empty_report() {
        let report = SeatingReport::build(&[], &[]);
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No seats assigned\n");
    }
}

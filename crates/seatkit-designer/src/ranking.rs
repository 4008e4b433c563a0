//! Ranking engine.
//!
//! Both arrangement passes sort the eligible seats and the people, then pair
//! them up index by index. Seat ordering groups nearly equal y values into
//! rows so that a seat a few units lower than its neighbour still belongs to
//! the same row.
//!
//! Tolerance comparisons are not transitive, so they are never used directly
//! as a comparator. Instead every seat gets a row index (and, for the
//! position pass, a ring index of nearly equal center distances) by walking
//! the values in sorted order and opening a new group whenever a value moves
//! more than the tolerance past the group's first value. The resulting keys
//! are totally ordered and the sorts are stable.

use crate::error::{LayoutError, LayoutResult};
use crate::model::{Person, Seat};
use crate::seat_store::SeatStore;
use seatkit_core::{PersonId, SeatId};
use seatkit_settings::LayoutConfig;

/// Inputs shared by the seat orderings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    /// x of the vertical line seats are measured from
    pub center_x: f64,
    /// y values within this distance of a row's first y join that row
    pub row_tolerance: f64,
    /// center distances within this distance are ordered left to right
    pub center_tolerance: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for RankingParams {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            center_x: config.venue.center_x(),
            row_tolerance: config.arrangement.row_tolerance,
            center_tolerance: config.arrangement.center_tolerance,
        }
    }
}

/// Which seat ordering an arrangement pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeStrategy {
    /// rank weight, then row, then distance from center
    Importance,
    /// row, then distance from center, then left to right
    Position,
}

/// Pairs produced by an arrangement pass, before they are written.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrangementPlan {
    pub pairs: Vec<(SeatId, PersonId)>,
    pub eligible_seats: usize,
    pub candidates: usize,
}

impl ArrangementPlan {
    /// True when there was nothing to pair.
    pub fn is_empty(&self) -> bool {
        self.eligible_seats == 0 || self.candidates == 0
    }

    pub fn outcome(&self) -> ArrangementOutcome {
        ArrangementOutcome {
            assigned: self.pairs.len(),
            empty_seats: self.eligible_seats - self.pairs.len(),
            unseated: self.candidates - self.pairs.len(),
        }
    }
}

/// Summary of an arrangement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrangementOutcome {
    pub assigned: usize,
    /// Eligible seats left without an occupant
    pub empty_seats: usize,
    /// Candidates left without a seat
    pub unseated: usize,
}

fn center_distance(seat: &Seat, center_x: f64) -> f64 {
    (seat.center_x() - center_x).abs()
}

/// Assigns ascending group numbers to `values`, opening a new group when a
/// value exceeds the current group's first value by more than `tolerance`.
fn group_by_tolerance(values: &[f64], tolerance: f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|a, b| values[*a].total_cmp(&values[*b]));

    let mut groups = vec![0; values.len()];
    let mut group = 0;
    let mut anchor = None;
    for index in order {
        let value = values[index];
        match anchor {
            Some(first) if value - first <= tolerance => {}
            Some(_) => {
                group += 1;
                anchor = Some(value);
            }
            None => anchor = Some(value),
        }
        groups[index] = group;
    }
    groups
}

/// Row index for each seat, front row first.
pub fn row_indices(seats: &[&Seat], row_tolerance: f64) -> Vec<usize> {
    let ys: Vec<f64> = seats.iter().map(|s| s.y).collect();
    group_by_tolerance(&ys, row_tolerance)
}

/// Sorts seats by rank weight, then row, then distance from center.
pub fn order_by_importance<'a>(seats: &[&'a Seat], params: &RankingParams) -> Vec<&'a Seat> {
    let rows = row_indices(seats, params.row_tolerance);
    let mut keyed: Vec<(i64, usize, f64, &Seat)> = seats
        .iter()
        .zip(rows)
        .map(|(seat, row)| {
            (
                seat.rank_weight,
                row,
                center_distance(seat, params.center_x),
                *seat,
            )
        })
        .collect();

    keyed.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(a.1.cmp(&b.1))
            .then(a.2.total_cmp(&b.2))
    });
    keyed.into_iter().map(|(_, _, _, seat)| seat).collect()
}

/// Sorts seats by row, then distance from center, breaking near ties left to right.
pub fn order_by_position<'a>(seats: &[&'a Seat], params: &RankingParams) -> Vec<&'a Seat> {
    let rows = row_indices(seats, params.row_tolerance);
    let distances: Vec<f64> = seats
        .iter()
        .map(|s| center_distance(s, params.center_x))
        .collect();

    // rings are grouped per row so one row's spread never shifts another's
    let mut rings = vec![0; seats.len()];
    let row_count = rows.iter().max().map_or(0, |max| max + 1);
    for row in 0..row_count {
        let members: Vec<usize> = (0..seats.len()).filter(|i| rows[*i] == row).collect();
        let values: Vec<f64> = members.iter().map(|i| distances[*i]).collect();
        let groups = group_by_tolerance(&values, params.center_tolerance);
        for (member, ring) in members.iter().zip(groups) {
            rings[*member] = ring;
        }
    }

    let mut order: Vec<usize> = (0..seats.len()).collect();
    order.sort_by(|a, b| {
        rows[*a]
            .cmp(&rows[*b])
            .then(rings[*a].cmp(&rings[*b]))
            .then(seats[*a].x.total_cmp(&seats[*b].x))
    });
    order.into_iter().map(|i| seats[i]).collect()
}

/// Sorts people by rank score, highest first. Equal scores keep input order.
pub fn sort_people<'a>(people: &[&'a Person]) -> Vec<&'a Person> {
    let mut sorted = people.to_vec();
    sorted.sort_by(|a, b| b.rank_score.cmp(&a.rank_score));
    sorted
}

fn order_seats<'a>(
    seats: &[&'a Seat],
    strategy: ArrangeStrategy,
    params: &RankingParams,
) -> Vec<&'a Seat> {
    match strategy {
        ArrangeStrategy::Importance => order_by_importance(seats, params),
        ArrangeStrategy::Position => order_by_position(seats, params),
    }
}

/// Computes the pairs an arrangement pass would write.
///
/// Eligible seats are visible, unpinned seats. Every person is a
/// candidate; the pass starts from an empty layout, so pinned seats lose
/// their occupants and are not refilled.
pub fn plan_arrangement(
    seats: &[Seat],
    people: &[Person],
    strategy: ArrangeStrategy,
    params: &RankingParams,
) -> ArrangementPlan {
    let eligible: Vec<&Seat> = seats.iter().filter(|s| s.is_eligible()).collect();
    let candidates: Vec<&Person> = people.iter().collect();

    let ordered_seats = order_seats(&eligible, strategy, params);
    let ordered_people = sort_people(&candidates);

    let pairs = ordered_seats
        .iter()
        .zip(ordered_people.iter())
        .map(|(seat, person)| (seat.id, person.id))
        .collect();

    ArrangementPlan {
        pairs,
        eligible_seats: eligible.len(),
        candidates: candidates.len(),
    }
}

/// Rank weights derived purely from geometry, 1-based, for every seat
/// (hidden and pinned included). Shapes are left out.
pub fn rerank_plan(seats: &[Seat], params: &RankingParams) -> Vec<(SeatId, i64)> {
    let assignable: Vec<&Seat> = seats.iter().filter(|s| s.is_seat()).collect();
    order_by_position(&assignable, params)
        .into_iter()
        .enumerate()
        .map(|(index, seat)| (seat.id, index as i64 + 1))
        .collect()
}

/// Interactive mode where each click hands out the next rank weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSequencer {
    active: bool,
    counter: i64,
}

impl Default for RankSequencer {
    fn default() -> Self {
        Self {
            active: false,
            counter: 1,
        }
    }
}

impl RankSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the mode with the counter at `start`.
    pub fn start(&mut self, start: i64) {
        self.active = true;
        self.counter = start;
    }

    /// Leaves the mode. The counter keeps its value.
    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The weight the next apply will write.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// Writes the current counter to `seat_id` and advances it.
    /// The counter only advances when the write succeeds.
    pub fn apply(&mut self, store: &mut SeatStore, seat_id: SeatId) -> LayoutResult<i64> {
        if !self.active {
            return Err(LayoutError::SequenceInactive);
        }
        let weight = self.counter;
        store.set_rank_weight(seat_id, weight)?;
        self.counter += 1;
        Ok(weight)
    }
}

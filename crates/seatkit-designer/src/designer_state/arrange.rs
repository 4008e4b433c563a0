//! Arrangement passes, sequential ranking and geometric re-rank.

use super::DesignerState;
use crate::error::LayoutResult;
use crate::ranking::{plan_arrangement, rerank_plan, ArrangeStrategy, ArrangementOutcome};
use seatkit_core::SeatId;

impl DesignerState {
    /// Reassigns every eligible seat from the sorted roster.
    ///
    /// Every seat is cleared first, pinned ones included, and the whole
    /// roster is zipped against the visible unpinned seats. With no eligible
    /// seat or no person this is a no-op.
    pub fn arrange(&mut self, strategy: ArrangeStrategy) -> ArrangementOutcome {
        let plan = plan_arrangement(
            self.store.seats(),
            self.roster.people(),
            strategy,
            &self.ranking_params(),
        );
        if plan.is_empty() {
            tracing::info!(
                "Nothing to arrange ({} eligible seats, {} candidates)",
                plan.eligible_seats,
                plan.candidates
            );
            return ArrangementOutcome::default();
        }

        self.store.commit_arrangement(&plan.pairs);
        self.occupancy_changed();

        let outcome = plan.outcome();
        tracing::info!(
            "Arranged by {:?}: {} assigned, {} seats empty, {} people unseated",
            strategy,
            outcome.assigned,
            outcome.empty_seats,
            outcome.unseated
        );
        outcome
    }

    pub fn arrange_by_importance(&mut self) -> ArrangementOutcome {
        self.arrange(ArrangeStrategy::Importance)
    }

    pub fn arrange_by_position(&mut self) -> ArrangementOutcome {
        self.arrange(ArrangeStrategy::Position)
    }

    /// Enters sequential ranking with the counter at `start`.
    pub fn start_rank_sequence(&mut self, start: i64) {
        self.sequencer.start(start);
    }

    /// Leaves sequential ranking; the counter is kept.
    pub fn stop_rank_sequence(&mut self) {
        self.sequencer.stop();
    }

    pub fn is_sequencing(&self) -> bool {
        self.sequencer.is_active()
    }

    pub fn rank_sequence_counter(&self) -> i64 {
        self.sequencer.counter()
    }

    /// Gives `seat_id` the next rank weight in the sequence.
    pub fn apply_rank_to_seat(&mut self, seat_id: SeatId) -> LayoutResult<i64> {
        let weight = self.sequencer.apply(&mut self.store, seat_id)?;
        self.is_modified = true;
        Ok(weight)
    }

    /// Renumbers every seat's rank weight from its position. Occupants are
    /// untouched. Returns how many seats were renumbered.
    pub fn rerank_from_geometry(&mut self) -> usize {
        let weights = rerank_plan(self.store.seats(), &self.ranking_params());
        let written = self.store.apply_rank_weights(&weights);
        if written > 0 {
            self.is_modified = true;
            tracing::info!("Re-ranked {} seats from geometry", written);
        }
        written
    }
}

//! People, categories and drop-to-seat assignment.

use super::DesignerState;
use crate::error::{LayoutError, LayoutResult};
use crate::model::Person;
use seatkit_core::{PersonId, SeatId};

impl DesignerState {
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = self.roster.add_person(person);
        self.occupancy_changed();
        id
    }

    /// Creates a person whose score is suggested by their category.
    pub fn add_person_in_category(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        organization: impl Into<String>,
        category: &str,
    ) -> PersonId {
        let score = self.catalog.suggested_score(category);
        self.add_person(Person::new(name, title, organization, category, score))
    }

    /// Appends a batch import.
    pub fn add_people(&mut self, people: impl IntoIterator<Item = Person>) -> Vec<PersonId> {
        let ids = self.roster.add_people(people);
        self.occupancy_changed();
        tracing::info!("Imported {} people", ids.len());
        ids
    }

    /// Removes a person. Seats still holding them keep the dangling id.
    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        let removed = self.roster.remove_person(id);
        if removed.is_some() {
            self.is_modified = true;
        }
        removed
    }

    /// Replaces the roster, then resynchronizes.
    pub fn update_people(&mut self, people: Vec<Person>) {
        self.roster.replace_all(people);
        self.occupancy_changed();
    }

    pub fn categorize(&mut self, ids: &[PersonId], label: &str) -> usize {
        let changed = self.roster.categorize(ids, label, &self.catalog);
        if changed > 0 {
            self.is_modified = true;
        }
        changed
    }

    pub fn suggested_score(&self, label: &str) -> i64 {
        self.catalog.suggested_score(label)
    }

    /// Empties every seat and marks everyone unseated.
    pub fn reset_seating(&mut self) -> usize {
        let cleared = self.store.clear_all_assignments();
        self.occupancy_changed();
        cleared
    }

    /// Seats `person` at `seat_id`, vacating any seat they held.
    ///
    /// When the target was occupied and `swap` is set, the displaced person
    /// moves to the vacated seat; otherwise they become unseated. All writes
    /// share one snapshot.
    pub fn drop_person(
        &mut self,
        seat_id: SeatId,
        person: PersonId,
        swap: bool,
    ) -> LayoutResult<()> {
        let target = self
            .store
            .get(seat_id)
            .ok_or(LayoutError::NotFound(seat_id))?;
        if target.is_shape() {
            return Err(LayoutError::NotAssignable(seat_id));
        }
        let displaced = target.occupant;
        if displaced == Some(person) {
            return Ok(());
        }
        let previous = self.store.seat_of(person).map(|s| s.id);

        self.store.snapshot();
        if let Some(previous) = previous {
            let refill = if swap { displaced } else { None };
            self.store.set_occupant(previous, refill);
        }
        self.store.set_occupant(seat_id, Some(person));
        self.occupancy_changed();
        tracing::debug!("Dropped {} on {}", person, seat_id);
        Ok(())
    }
}

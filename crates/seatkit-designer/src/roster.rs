//! Roster of candidate occupants.
//!
//! The seated flag on each person is derived from seat occupancy and only
//! ever written by [`RosterStore::synchronize`].

use crate::model::{Person, Seat};
use seatkit_core::{CategoryCatalog, PersonId};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterStore {
    people: Vec<Person>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Appends one person and returns their id.
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = person.id;
        self.people.push(person);
        id
    }

    /// Appends a batch import, returning the ids in input order.
    pub fn add_people(&mut self, people: impl IntoIterator<Item = Person>) -> Vec<PersonId> {
        people.into_iter().map(|p| self.add_person(p)).collect()
    }

    /// Removes a person. Seats that reference them keep the dangling id.
    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        let index = self.people.iter().position(|p| p.id == id)?;
        Some(self.people.remove(index))
    }

    /// Replaces the whole list. Call `synchronize` afterwards.
    pub fn replace_all(&mut self, people: Vec<Person>) {
        self.people = people;
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id == id)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn seated(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_seated())
    }

    pub fn unseated(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| !p.is_seated())
    }

    /// Rewrites every seated flag from the occupants of visible seats.
    ///
    /// Idempotent; returns the number of people marked seated.
    pub fn synchronize(&mut self, seats: &[Seat]) -> usize {
        let occupied: HashSet<PersonId> = seats
            .iter()
            .filter(|s| s.visible && s.is_seat())
            .filter_map(|s| s.occupant)
            .collect();

        let mut seated = 0;
        for person in &mut self.people {
            let is_seated = occupied.contains(&person.id);
            person.set_seated(is_seated);
            seated += usize::from(is_seated);
        }
        seated
    }

    /// Sets the category of the listed people.
    ///
    /// When the catalog knows the label, their rank score becomes the
    /// category weight; unknown labels leave scores alone.
    pub fn categorize(
        &mut self,
        ids: &[PersonId],
        label: &str,
        catalog: &CategoryCatalog,
    ) -> usize {
        let weight = catalog.get_by_label(label).map(|c| c.weight);
        let mut changed = 0;
        for person in self.people.iter_mut().filter(|p| ids.contains(&p.id)) {
            person.category = label.to_string();
            if let Some(weight) = weight {
                person.rank_score = weight;
            }
            changed += 1;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronize_tracks_visible_occupants() {
        let mut roster = RosterStore::new();
        let a = roster.add_person(Person::new("A", "", "", "", 10));
        let b = roster.add_person(Person::new("B", "", "", "", 20));

        let mut front = Seat::new_seat(0.0, 0.0, 100.0, 150.0, "1", 1);
        front.occupant = Some(a);
        let mut hidden = Seat::new_seat(200.0, 0.0, 100.0, 150.0, "2", 2);
        hidden.occupant = Some(b);
        hidden.visible = false;

        assert_eq!(roster.synchronize(&[front.clone(), hidden.clone()]), 1);
        assert!(roster.get(a).unwrap().is_seated());
        assert!(!roster.get(b).unwrap().is_seated());

        front.occupant = None;
        assert_eq!(roster.synchronize(&[front, hidden]), 0);
        assert_eq!(roster.seated().count(), 0);
        assert_eq!(roster.unseated().count(), 2);
    }

    #[test]
    fn test_dangling_occupant_is_ignored() {
        let mut roster = RosterStore::new();
        roster.add_person(Person::new("A", "", "", "", 10));
        let mut seat = Seat::new_seat(0.0, 0.0, 100.0, 150.0, "1", 1);
        seat.occupant = Some(PersonId::new());
        assert_eq!(roster.synchronize(&[seat]), 0);
    }

    #[test]
    fn test_categorize_uses_catalog_weight() {
        let mut catalog = CategoryCatalog::new();
        catalog.add_category("Guest", 42, "#fff", "#000");

        let mut roster = RosterStore::new();
        let ids = roster.add_people(vec![
            Person::new("A", "", "", "", 1),
            Person::new("B", "", "", "", 2),
        ]);
        assert_eq!(roster.categorize(&ids[..1], "Guest", &catalog), 1);
        assert_eq!(roster.get(ids[0]).unwrap().rank_score, 42);
        assert_eq!(roster.get(ids[0]).unwrap().category, "Guest");

        roster.categorize(&ids[1..], "Unlisted", &catalog);
        assert_eq!(roster.get(ids[1]).unwrap().rank_score, 2);
    }

    #[test]
    fn test_remove_person() {
        let mut roster = RosterStore::new();
        let id = roster.add_person(Person::new("A", "", "", "", 10));
        assert!(roster.remove_person(id).is_some());
        assert!(roster.remove_person(id).is_none());
        assert!(roster.is_empty());
    }
}

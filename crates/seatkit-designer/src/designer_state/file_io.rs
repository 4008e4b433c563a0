//! Snapshots and file I/O (save, load, new) for designer state.

use super::DesignerState;
use crate::model::{Person, Seat};
use crate::serialization::{ProjectFile, VenueData, VenueFile};
use anyhow::Context;
use std::path::Path;

/// The full seat and person lists, for external persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub seats: Vec<Seat>,
    pub people: Vec<Person>,
}

impl DesignerState {
    /// Copies the current seat and person lists.
    pub fn export_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            seats: self.store.seats().to_vec(),
            people: self.roster.people().to_vec(),
        }
    }

    /// Replaces both lists with a previously exported snapshot.
    ///
    /// History and selection are cleared, then the roster is resynchronized.
    pub fn replace_snapshot(&mut self, snapshot: LayoutSnapshot) {
        self.store.replace_all(snapshot.seats);
        self.roster.replace_all(snapshot.people);
        self.store.clear_history();
        self.selection.clear();
        self.synchronize();
    }

    /// Starts over with an empty layout and roster.
    pub fn new_project(&mut self, name: impl Into<String>) {
        let catalog = std::mem::take(&mut self.catalog);
        *self = Self::new(self.config.clone());
        self.catalog = catalog;
        self.design_name = name.into();
    }

    /// Builds the project document for the current session.
    pub fn to_project_file(&self) -> ProjectFile {
        let venue = self.store.venue();
        let mut project = ProjectFile::new(&self.design_name, venue.width, venue.height);
        project.venue.background_image = self.background_image.clone();
        project.venue.seats = self.store.seats().to_vec();
        project.personnel = self.roster.people().to_vec();
        project.categories = Some(self.catalog.clone());
        project.view_state = self.view_state;
        project
    }

    /// Replaces the session contents with a project document.
    pub fn load_project(&mut self, project: ProjectFile) {
        self.design_name = project.metadata.name;
        self.background_image = project.venue.background_image;
        self.view_state = project.view_state;
        if let Some(catalog) = project.categories {
            self.catalog = catalog;
        }
        self.store
            .set_venue_size(project.venue.width, project.venue.height);
        self.replace_snapshot(LayoutSnapshot {
            seats: project.venue.seats,
            people: project.personnel,
        });
        self.sequencer.stop();
        self.is_modified = false;
    }

    /// Save project to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut project = self.to_project_file();
        project
            .save_to_file(&path)
            .with_context(|| format!("Failed to write project file {}", path.as_ref().display()))?;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load project from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let project = ProjectFile::load_from_file(&path)
            .with_context(|| format!("Failed to read project file {}", path.as_ref().display()))?;
        self.load_project(project);
        self.current_file_path = Some(path.as_ref().to_path_buf());
        Ok(())
    }

    /// Layout-only export: seats and background, no roster.
    pub fn export_venue(&self) -> VenueFile {
        let venue = self.store.venue();
        VenueFile::new(VenueData {
            width: venue.width,
            height: venue.height,
            background_image: self.background_image.clone(),
            seats: self.store.seats().to_vec(),
        })
    }

    /// Replaces the layout with an imported venue.
    ///
    /// Every occupant is cleared, so the whole roster ends up unseated.
    pub fn import_venue(&mut self, file: VenueFile) {
        let mut seats = file.venue.seats;
        for seat in &mut seats {
            seat.occupant = None;
        }
        self.background_image = file.venue.background_image;
        self.store.set_venue_size(file.venue.width, file.venue.height);
        self.store.replace_all(seats);
        self.store.clear_history();
        self.selection.clear();
        self.occupancy_changed();
        tracing::info!("Imported venue with {} objects", self.store.len());
    }

    pub fn export_venue_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.export_venue()
            .save_to_file(&path)
            .with_context(|| format!("Failed to write venue file {}", path.as_ref().display()))
    }

    pub fn import_venue_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = VenueFile::load_from_file(&path)
            .with_context(|| format!("Failed to read venue file {}", path.as_ref().display()))?;
        self.import_venue(file);
        Ok(())
    }
}

//! Serialization and deserialization for project files.
//!
//! A project file is a single JSON document holding the layout, the roster,
//! the category catalog and the last view state. A venue file holds only the
//! layout, for reuse across events.

use chrono::{DateTime, Utc};
use seatkit_core::{CategoryCatalog, ProjectError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::model::{Person, Seat};

/// Project file format version
pub const FILE_FORMAT_VERSION: &str = "2.1";

const VENUE_ONLY_KIND: &str = "venue-only";

/// Complete project file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: String,
    pub metadata: ProjectMetadata,
    pub venue: VenueData,
    pub personnel: Vec<Person>,
    #[serde(default)]
    pub categories: Option<CategoryCatalog>,
    #[serde(default)]
    pub view_state: ViewState,
}

/// Project metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Layout section shared by project and venue files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueData {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub background_image: Option<String>,
    pub seats: Vec<Seat>,
}

/// Last zoom and pan of the layout view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

/// Layout-only export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueFile {
    pub version: String,
    pub kind: String,
    pub exported: DateTime<Utc>,
    pub venue: VenueData,
}

const PROJECT_SECTIONS: &[&str] = &["version", "metadata", "venue", "personnel"];
const VENUE_SECTIONS: &[&str] = &["version", "kind", "venue"];

/// Parses `json` and checks the top-level sections and format version
/// before the typed decode, so a wrong file reports what is wrong with it.
fn parse_document(json: &str, sections: &[&str]) -> Result<Value> {
    let value: Value = serde_json::from_str(json)?;
    if let Some(section) = sections.iter().find(|s| value.get(**s).is_none()) {
        return Err(ProjectError::MissingSection {
            section: section.to_string(),
        }
        .into());
    }
    let version = value["version"]
        .as_str()
        .ok_or_else(|| ProjectError::InvalidContents {
            reason: "version is not a string".to_string(),
        })?;
    check_version(version)?;
    Ok(value)
}

fn check_version(found: &str) -> std::result::Result<(), ProjectError> {
    let major = |v: &str| v.split('.').next().unwrap_or_default().to_string();
    if major(found) != major(FILE_FORMAT_VERSION) {
        return Err(ProjectError::UnsupportedVersion {
            found: found.to_string(),
            expected: FILE_FORMAT_VERSION.to_string(),
        });
    }
    Ok(())
}

impl ProjectFile {
    /// Create an empty project
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: ProjectMetadata {
                name: name.into(),
                description: String::new(),
                created: now,
                modified: now,
            },
            venue: VenueData {
                width,
                height,
                background_image: None,
                seats: Vec::new(),
            },
            personnel: Vec::new(),
            categories: None,
            view_state: ViewState::default(),
        }
    }

    /// Parse and version-check a project document
    pub fn from_json(json: &str) -> Result<Self> {
        let value = parse_document(json, PROJECT_SECTIONS)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save project to file, stamping the modified time
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.metadata.modified = Utc::now();
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!("Saved project to {}", path.as_ref().display());
        Ok(())
    }

    /// Load project from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let project = Self::from_json(&content)?;
        tracing::info!(
            "Loaded project '{}' ({} objects, {} people)",
            project.metadata.name,
            project.venue.seats.len(),
            project.personnel.len()
        );
        Ok(project)
    }
}

impl VenueFile {
    pub fn new(venue: VenueData) -> Self {
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            kind: VENUE_ONLY_KIND.to_string(),
            exported: Utc::now(),
            venue,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: VenueFile = serde_json::from_value(parse_document(json, VENUE_SECTIONS)?)?;
        if file.kind != VENUE_ONLY_KIND {
            return Err(ProjectError::InvalidContents {
                reason: format!("expected a {} file, found '{}'", VENUE_ONLY_KIND, file.kind),
            }
            .into());
        }
        Ok(file)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatkit_core::Error;

    #[test]
    fn test_round_trip_json() {
        let mut project = ProjectFile::new("Gala", 3200.0, 2400.0);
        project
            .venue
            .seats
            .push(Seat::new_seat(100.0, 100.0, 100.0, 150.0, "1", 1));
        project
            .personnel
            .push(Person::new("Ada", "Director", "Agency", "Guest", 10));

        let json = project.to_json().unwrap();
        let parsed = ProjectFile::from_json(&json).unwrap();
        assert_eq!(parsed, project);
    }

    #[test]
    fn test_rejects_other_major_version() {
        let mut project = ProjectFile::new("Gala", 3200.0, 2400.0);
        project.version = "1.0".to_string();
        let json = project.to_json().unwrap();
        let err = ProjectFile::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            Error::Project(ProjectError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_missing_section_is_named() {
        let mut value = serde_json::to_value(ProjectFile::new("Gala", 3200.0, 2400.0)).unwrap();
        value.as_object_mut().unwrap().remove("venue");
        let err = ProjectFile::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            &err,
            Error::Project(ProjectError::MissingSection { section }) if section == "venue"
        ));
        assert_eq!(err.to_string(), "Missing section 'venue' in project file");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = ProjectFile::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectFile::load_from_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_minor_version_accepted() {
        let mut project = ProjectFile::new("Gala", 3200.0, 2400.0);
        project.version = "2.0".to_string();
        assert!(ProjectFile::from_json(&project.to_json().unwrap()).is_ok());
    }

    #[test]
    fn test_venue_file_kind_checked() {
        let venue = VenueData {
            width: 3200.0,
            height: 2400.0,
            background_image: Some("hall.png".to_string()),
            seats: Vec::new(),
        };
        let mut file = VenueFile::new(venue);
        let json = serde_json::to_string(&file).unwrap();
        assert!(VenueFile::from_json(&json).is_ok());

        file.kind = "project".to_string();
        let json = serde_json::to_string(&file).unwrap();
        assert!(matches!(
            VenueFile::from_json(&json),
            Err(Error::Project(ProjectError::InvalidContents { .. }))
        ));
    }
}

//! # SeatKit Core
//!
//! Core types shared by every SeatKit crate.
//! Provides the identifiers for seats and people, the crate-wide error
//! type, and the category catalog used to colour and weight guests.

pub mod data;
pub mod error;

pub use data::categories::{Category, CategoryCatalog, CategoryStyle, CATEGORY_PRESETS};
pub use data::{PersonId, SeatId};

pub use error::{Error, ProjectError, Result};

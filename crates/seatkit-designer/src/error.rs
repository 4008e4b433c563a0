//! Error types for the layout engine.
//!
//! Every declined mutation is reported through [`LayoutError`]; a declined
//! operation never leaves the layout partially modified.

use seatkit_core::SeatId;
use thiserror::Error;

/// Reasons a layout operation was declined.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// The proposed footprint overlaps a visible seat.
    #[error("Position occupied by {blocking}")]
    Overlap { blocking: SeatId },

    /// The proposed footprint leaves the virtual venue.
    #[error("Outside venue bounds: ({x}, {y}) {width}x{height}")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// No object with this id exists.
    #[error("No object with id {0}")]
    NotFound(SeatId),

    /// Shapes cannot hold an occupant or a rank.
    #[error("Object {0} is a shape and cannot be assigned")]
    NotAssignable(SeatId),

    /// Paste requested with nothing copied.
    #[error("Clipboard is empty")]
    EmptyClipboard,

    /// Every placement attempt for the pasted group overlapped existing seats.
    #[error("No free position found after {attempts} attempts")]
    PasteBlocked { attempts: u32 },

    /// Every pasted object fell outside the venue.
    #[error("Nothing left to paste inside the venue")]
    NothingPlaced,

    /// Sequential ranking was applied while the mode is off.
    #[error("Sequential ranking is not active")]
    SequenceInactive,
}

impl LayoutError {
    /// Whether this is a rejected placement (overlap or bounds)
    pub fn is_placement(&self) -> bool {
        matches!(
            self,
            LayoutError::Overlap { .. }
                | LayoutError::OutOfBounds { .. }
                | LayoutError::PasteBlocked { .. }
                | LayoutError::NothingPlaced
        )
    }
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

//! Placeable objects and people.

use crate::geometry::Bounds;
use seatkit_core::{PersonId, SeatId};
use serde::{Deserialize, Serialize};

/// Rank weight given to shapes so they never sort ahead of seats.
pub const SHAPE_RANK_WEIGHT: i64 = 9999;

/// Label of the singleton main stage shape.
pub const MAIN_STAGE_LABEL: &str = "Main Stage";

/// What a placeable object is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    /// An assignable position
    Seat,
    /// A stage or obstacle; never assignable
    Shape,
}

/// Outline drawn for a shape. Validation always uses the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeForm {
    #[default]
    Rectangle,
    Ellipse,
}

/// A placeable object on the layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    /// Top-left x
    pub x: f64,
    /// Top-left y
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: SeatKind,
    #[serde(default)]
    pub form: ShapeForm,
    /// Free-text code shown to users, independent of rank
    pub label: String,
    /// Lower sorts first in importance-based arrangement
    pub rank_weight: i64,
    /// Excluded from automatic arrangement
    pub pinned: bool,
    pub occupant: Option<PersonId>,
    pub visible: bool,
    #[serde(default)]
    pub zone: Option<String>,
}

impl Seat {
    /// Creates an assignable seat.
    pub fn new_seat(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        label: impl Into<String>,
        rank_weight: i64,
    ) -> Self {
        Self {
            id: SeatId::new(),
            x,
            y,
            width,
            height,
            kind: SeatKind::Seat,
            form: ShapeForm::Rectangle,
            label: label.into(),
            rank_weight,
            pinned: false,
            occupant: None,
            visible: true,
            zone: None,
        }
    }

    /// Creates a non-assignable shape.
    pub fn new_shape(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        form: ShapeForm,
        label: impl Into<String>,
    ) -> Self {
        Self {
            kind: SeatKind::Shape,
            form,
            ..Self::new_seat(x, y, width, height, label, SHAPE_RANK_WEIGHT)
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_rect(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn is_seat(&self) -> bool {
        self.kind == SeatKind::Seat
    }

    pub fn is_shape(&self) -> bool {
        self.kind == SeatKind::Shape
    }

    /// Whether this object takes part in overlap checks against other seats.
    pub fn blocks_seats(&self) -> bool {
        self.visible && self.is_seat()
    }

    /// Visible, unpinned seat considered by an arrangement pass.
    pub fn is_eligible(&self) -> bool {
        self.visible && !self.pinned && self.is_seat()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// A candidate occupant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub title: String,
    pub organization: String,
    /// Free-text label; resolved against the category catalog by label
    pub category: String,
    /// Higher is more important
    pub rank_score: i64,
    #[serde(default)]
    pub note: Option<String>,
    /// Derived from seat assignments by the roster; never set directly
    #[serde(default)]
    seated: bool,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        organization: impl Into<String>,
        category: impl Into<String>,
        rank_score: i64,
    ) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            title: title.into(),
            organization: organization.into(),
            category: category.into(),
            rank_score,
            note: None,
            seated: false,
        }
    }

    /// True when a visible seat holds this person, as of the last synchronization.
    pub fn is_seated(&self) -> bool {
        self.seated
    }

    pub(crate) fn set_seated(&mut self, seated: bool) {
        self.seated = seated;
    }
}

//! Axis-aligned geometry used for placement validation.
//!
//! Pure functions only: overlap, containment, and grid snapping.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates bounds from two corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates bounds from a top-left corner and a size.
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns true when the interiors overlap. Touching edges do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Returns true when `other` lies entirely inside these bounds.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// Smallest bounds covering both.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Bounds shifted by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> Bounds {
        Bounds::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }

    /// Union of all bounds in the iterator, `None` when empty.
    pub fn enclosing<I: IntoIterator<Item = Bounds>>(iter: I) -> Option<Bounds> {
        iter.into_iter().reduce(|acc, b| acc.union(&b))
    }
}

/// Rounds `value` to the nearest multiple of `grid`.
///
/// A non-positive grid leaves the value unchanged.
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Bounds::from_rect(100.0, 100.0, 100.0, 150.0);
        let b = Bounds::from_rect(110.0, 110.0, 100.0, 150.0);
        let c = Bounds::from_rect(300.0, 100.0, 100.0, 150.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::from_rect(0.0, 0.0, 100.0, 150.0);
        let right = Bounds::from_rect(100.0, 0.0, 100.0, 150.0);
        let below = Bounds::from_rect(0.0, 150.0, 100.0, 150.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_contains() {
        let venue = Bounds::from_rect(0.0, 0.0, 3200.0, 2400.0);
        assert!(venue.contains(&Bounds::from_rect(0.0, 0.0, 100.0, 150.0)));
        assert!(venue.contains(&Bounds::from_rect(3100.0, 2250.0, 100.0, 150.0)));
        assert!(!venue.contains(&Bounds::from_rect(3101.0, 0.0, 100.0, 150.0)));
        assert!(!venue.contains(&Bounds::from_rect(-1.0, 0.0, 100.0, 150.0)));
    }

    #[test]
    fn test_enclosing() {
        let all = Bounds::enclosing(vec![
            Bounds::from_rect(10.0, 20.0, 5.0, 5.0),
            Bounds::from_rect(-5.0, 40.0, 5.0, 5.0),
        ])
        .unwrap();
        assert_eq!(all, Bounds::new(-5.0, 20.0, 15.0, 45.0));
        assert!(Bounds::enclosing(Vec::new()).is_none());
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(29.0, 20.0), 20.0);
        assert_eq!(snap_to_grid(31.0, 20.0), 40.0);
        assert_eq!(snap_to_grid(-11.0, 20.0), -20.0);
        assert_eq!(snap_to_grid(7.3, 0.0), 7.3);
    }
}

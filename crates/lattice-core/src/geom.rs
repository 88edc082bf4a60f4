//! Geometry primitive: [`Point`].

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer point. X grows right, Y grows down (row-major, like cell ids).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// All eight surrounding points in row-major order: the row above left
    /// to right, then left and right, then the row below.
    ///
    /// Inside any lattice this is ascending cell-id order.
    #[inline]
    pub const fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(-1, -1),
            self.shift(0, -1),
            self.shift(1, -1),
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(-1, 1),
            self.shift(0, 1),
            self.shift(1, 1),
        ]
    }

    /// Whether `other` is one of the eight surrounding points.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major: compares `y` first, matching cell-id order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 3), Point::new(0, 5));
    }

    #[test]
    fn neighbors_are_row_major() {
        let ns = Point::new(2, 2).neighbors_8();
        let mut sorted = ns;
        sorted.sort();
        assert_eq!(ns, sorted);
        assert!(!ns.contains(&Point::new(2, 2)));
    }

    #[test]
    fn adjacency() {
        let p = Point::new(3, 3);
        assert!(p.is_adjacent(Point::new(4, 4)));
        assert!(p.is_adjacent(Point::new(3, 2)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(5, 3)));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(4, 1).to_string(), "(4, 1)");
    }
}

//! Planar integer geometry.
//!
//! Positions are whole pixels (`i32`).  Distances come back as `f64`; the
//! intersection test stays in exact `i128` arithmetic so that parallel and
//! degenerate inputs are detected without any floating-point comparison.

use std::fmt;

/// A point on the integer grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        distance(self, other)
    }

    /// The point displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl From<Point> for [i32; 2] {
    #[inline]
    fn from(p: Point) -> [i32; 2] {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A finite line segment between two grid points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end:   Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Segment::new(Point::new(x1, y1), Point::new(x2, y2))`.
    #[inline]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// `true` if both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// `true` if this segment crosses or touches `other`.
    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.start, self.end, other.start, other.end)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Euclidean distance `sqrt((x2-x1)^2 + (y2-y1)^2)`.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = f64::from(p2.x) - f64::from(p1.x);
    let dy = f64::from(p2.y) - f64::from(p1.y);
    (dx * dx + dy * dy).sqrt()
}

/// Segment–segment intersection test for `a1→a2` against `b1→b2`.
///
/// Solves the two parametric line equations and reports an intersection when
/// both parameters `t` (along `a`) and `u` (along `b`) lie in `[0, 1]`,
/// endpoints included, so touching counts as intersecting.
///
/// A zero denominator means the segments are parallel or collinear, or at
/// least one of them has zero length.  All of these report `false`:
/// collinear overlap is not treated as a crossing.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let (x1, y1) = (i128::from(a1.x), i128::from(a1.y));
    let (x2, y2) = (i128::from(a2.x), i128::from(a2.y));
    let (x3, y3) = (i128::from(b1.x), i128::from(b1.y));
    let (x4, y4) = (i128::from(b2.x), i128::from(b2.y));

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0 {
        return false;
    }

    let t_num = (x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4);
    let u_num = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3));

    in_unit_interval(t_num, den) && in_unit_interval(u_num, den)
}

/// `0 <= num / den <= 1` without dividing.  `den` must be non-zero.
#[inline]
fn in_unit_interval(num: i128, den: i128) -> bool {
    if den > 0 {
        (0..=den).contains(&num)
    } else {
        (den..=0).contains(&num)
    }
}

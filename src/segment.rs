// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{Error, Point};

/// Represents a named, straight line between two distinct [Points](Point).
///
/// The length and heading are computed once, on construction.
/// Segments are directed - a [reversed](Segment::reverse) segment is not equal
/// to the original one.
#[derive(Debug, Clone)]
pub struct Segment {
    name: Arc<str>,
    p1: Point,
    p2: Point,
    length: f64,
    heading: f64,
}

impl Segment {
    /// Creates a new Segment going from `p1` to `p2`.
    ///
    /// Returns [Error::DegenerateSegment] if both points are equal.
    pub fn new<S: Into<Arc<str>>>(name: S, p1: Point, p2: Point) -> Result<Self, Error> {
        let heading = p1.heading_to(&p2).map_err(|_| Error::DegenerateSegment(p1))?;
        Ok(Self {
            name: name.into(),
            p1,
            p2,
            length: p1.distance_to(&p2),
            heading,
        })
    }

    /// Returns a Segment with the same name, going from `p2` to `p1`.
    pub fn reverse(&self) -> Self {
        Self {
            name: self.name.clone(),
            p1: self.p2,
            p2: self.p1,
            length: self.length,
            // p1 != p2 is already guaranteed, and the heading can't be undefined
            heading: self.p2.heading_to(&self.p1).unwrap_or_default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The starting point.
    pub fn p1(&self) -> Point {
        self.p1
    }

    /// The ending point.
    pub fn p2(&self) -> Point {
        self.p2
    }

    /// Length of the segment, in kilometers.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Compass heading from [Segment::p1] to [Segment::p2], in degrees.
    /// See [Point::heading_to].
    pub fn heading(&self) -> f64 {
        self.heading
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1 && self.p2 == other.p2 && self.name == other.name
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.p1.hash(state);
        self.p2.hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.p1, self.p2)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-6),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    fn p(lat: i32, lon: i32) -> Point {
        Point::new(lat, lon).unwrap()
    }

    #[test]
    fn derived_values() {
        let s = Segment::new("Main St", p(0, 0), p(0, 1_000)).unwrap();
        assert_eq!(s.name(), "Main St");
        assert_eq!(s.p1(), p(0, 0));
        assert_eq!(s.p2(), p(0, 1_000));
        assert_almost_eq!(s.length(), p(0, 0).distance_to(&p(0, 1_000)));
        assert_almost_eq!(s.heading(), 90.0);
    }

    #[test]
    fn degenerate() {
        assert_eq!(
            Segment::new("Main St", p(5, 5), p(5, 5)),
            Err(Error::DegenerateSegment(p(5, 5)))
        );
    }

    #[test]
    fn reverse() {
        let s = Segment::new("Main St", p(0, 0), p(1_000, 2_000)).unwrap();
        let r = s.reverse();

        assert_eq!(r.name(), "Main St");
        assert_eq!(r.p1(), s.p2());
        assert_eq!(r.p2(), s.p1());
        assert_almost_eq!(r.length(), s.length());
        assert_almost_eq!(r.heading(), (s.heading() + 180.0) % 360.0);

        assert_ne!(r, s);
        assert_eq!(r.reverse(), s);
    }

    #[test]
    fn equality() {
        let a = Segment::new("Main St", p(0, 0), p(0, 1)).unwrap();
        let b = Segment::new(String::from("Main St"), p(0, 0), p(0, 1)).unwrap();
        let c = Segment::new("Oak Ave", p(0, 0), p(0, 1)).unwrap();
        let d = Segment::new("Main St", p(0, 0), p(0, 2)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: HashSet<Segment> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn display() {
        let s = Segment::new("Main St", p(1_000_000, 0), p(1_000_000, 500_000)).unwrap();
        assert_eq!(
            s.to_string(),
            "Main St: (1.000000, 0.000000) -> (1.000000, 0.500000)"
        );
    }
}

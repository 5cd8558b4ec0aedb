// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chain::{Chain, Iter};
use crate::{Error, Point, Segment};

/// Represents a named path element, like a street or a trail,
/// made of consecutive [Segments](Segment) which all share the same name.
///
/// Features are immutable. [Feature::append] returns a new Feature,
/// sharing all existing segments with the receiver.
#[derive(Debug, Clone)]
pub struct Feature {
    segments: Chain<Segment>,
    start: Point,
    start_heading: f64,
    length: f64,
}

impl Feature {
    /// Creates a Feature consisting of a single [Segment].
    pub fn new(segment: Segment) -> Self {
        Self {
            start: segment.p1(),
            start_heading: segment.heading(),
            length: segment.length(),
            segments: Chain::new(segment),
        }
    }

    /// Returns a new Feature, extended by the provided [Segment].
    ///
    /// The segment must have the same name as this Feature ([Error::NameMismatch]
    /// otherwise), and must start where this Feature ends ([Error::Disjoint] otherwise).
    pub fn append(&self, segment: Segment) -> Result<Self, Error> {
        if segment.name() != self.name() {
            return Err(Error::NameMismatch {
                expected: self.name().to_string(),
                got: segment.name().to_string(),
            });
        }

        if segment.p1() != self.end() {
            return Err(Error::Disjoint {
                end: self.end(),
                start: segment.p1(),
            });
        }

        Ok(Self {
            start: self.start,
            start_heading: self.start_heading,
            length: self.length + segment.length(),
            segments: self.segments.push(segment),
        })
    }

    pub fn name(&self) -> &str {
        self.last_segment().name()
    }

    /// Starting point of the first segment.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Ending point of the last segment.
    pub fn end(&self) -> Point {
        self.last_segment().p2()
    }

    /// Heading of the first segment, in degrees.
    pub fn start_heading(&self) -> f64 {
        self.start_heading
    }

    /// Heading of the last segment, in degrees.
    pub fn end_heading(&self) -> f64 {
        self.last_segment().heading()
    }

    /// Total length of all segments, in kilometers.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the number of segments in this Feature. Always at least one.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns an iterator over all [Segments](Segment) of this Feature, in order.
    pub fn segments(&self) -> Iter<'_, Segment> {
        self.segments.iter()
    }

    fn last_segment(&self) -> &Segment {
        self.segments.last()
    }
}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Feature {}

impl Hash for Feature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.segments().for_each(|s| s.hash(state));
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({:.3} km)",
            self.name(),
            self.start,
            self.end(),
            self.length
        )
    }
}

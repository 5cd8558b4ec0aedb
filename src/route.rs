// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chain::{Chain, Iter};
use crate::{Error, Feature, Point, Segment};

/// Represents a path made of consecutive [Segments](Segment) with arbitrary names.
///
/// Apart from the segments themselves, a Route also keeps them grouped into
/// [Features](Feature) - maximal runs of consecutive segments sharing the same name.
/// No two consecutive features of a Route have the same name.
///
/// Routes are immutable. [Route::append] returns a new Route in constant time,
/// sharing all segments and all but the last feature with the receiver.
#[derive(Debug, Clone)]
pub struct Route {
    segments: Chain<Segment>,
    features: Chain<Feature>,
    start: Point,
    start_heading: f64,
    length: f64,
}

impl Route {
    /// Creates a Route consisting of a single [Segment].
    pub fn new(segment: Segment) -> Self {
        Self {
            start: segment.p1(),
            start_heading: segment.heading(),
            length: segment.length(),
            features: Chain::new(Feature::new(segment.clone())),
            segments: Chain::new(segment),
        }
    }

    /// Creates a Route by [appending](Route::append) all provided segments, in order.
    ///
    /// Returns [None] if the iterator is empty, or the first error encountered.
    pub fn from_segments<I: IntoIterator<Item = Segment>>(
        segments: I,
    ) -> Result<Option<Self>, Error> {
        let mut segments = segments.into_iter();
        let Some(first) = segments.next() else {
            return Ok(None);
        };

        let mut route = Self::new(first);
        for segment in segments {
            route = route.append(segment)?;
        }
        Ok(Some(route))
    }

    /// Returns a new Route, extended by the provided [Segment].
    ///
    /// The segment must start where this Route ends ([Error::Disjoint] otherwise).
    /// If the segment has the same name as the last [Feature], that feature is
    /// extended; otherwise a new feature is started.
    pub fn append(&self, segment: Segment) -> Result<Self, Error> {
        if segment.p1() != self.end() {
            return Err(Error::Disjoint {
                end: self.end(),
                start: segment.p1(),
            });
        }

        let last_feature = self.features.last();
        let features = if last_feature.name() == segment.name() {
            log::trace!("extending feature {:?}", segment.name());
            self.features
                .replace_last(last_feature.append(segment.clone())?)
        } else {
            log::trace!("starting feature {:?}", segment.name());
            self.features.push(Feature::new(segment.clone()))
        };

        let route = Self {
            start: self.start,
            start_heading: self.start_heading,
            length: self.length + segment.length(),
            segments: self.segments.push(segment),
            features,
        };

        debug_assert_eq!(route.features.last().end(), route.end());
        Ok(route)
    }

    /// Starting point of the first segment.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Ending point of the last segment.
    pub fn end(&self) -> Point {
        self.segments.last().p2()
    }

    /// Heading of the first segment, in degrees.
    pub fn start_heading(&self) -> f64 {
        self.start_heading
    }

    /// Heading of the last segment, in degrees.
    pub fn end_heading(&self) -> f64 {
        self.segments.last().heading()
    }

    /// Total length of all segments, in kilometers.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Returns an iterator over all [Segments](Segment) of this Route, in order.
    pub fn segments(&self) -> Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Returns an iterator over all [Features](Feature) of this Route, in order.
    pub fn features(&self) -> Iter<'_, Feature> {
        self.features.iter()
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.feature_count());
        self.features().for_each(|f| f.hash(state));
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, feature) in self.features().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", feature)?;
        }
        Ok(())
    }
}

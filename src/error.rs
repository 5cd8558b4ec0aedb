// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::point::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::Point;

/// Error conditions which may occur when constructing or extending
/// [Points](Point), [Segments](crate::Segment), [Features](crate::Feature)
/// and [Routes](crate::Route).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("latitude out of range: {0} not in [{MIN_LATITUDE}, {MAX_LATITUDE}]")]
    LatitudeOutOfRange(i32),

    #[error("longitude out of range: {0} not in [{MIN_LONGITUDE}, {MAX_LONGITUDE}]")]
    LongitudeOutOfRange(i32),

    #[error("coordinate is not a finite number")]
    NonFiniteCoordinate,

    /// A segment would start and end at the same point.
    #[error("degenerate segment: both endpoints at {0}")]
    DegenerateSegment(Point),

    /// A segment appended to a [Feature](crate::Feature) has a different name.
    #[error("segment name mismatch: got {got:?}, expected {expected:?}")]
    NameMismatch { expected: String, got: String },

    /// An appended segment doesn't start where the sequence ends.
    #[error("disjoint segment: sequence ends at {end}, but segment starts at {start}")]
    Disjoint { end: Point, start: Point },

    /// There is no compass heading between a point and itself.
    #[error("undefined heading: both points at {0}")]
    UndefinedHeading(Point),
}

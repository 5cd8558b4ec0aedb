// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Immutable route geometry and turn-by-turn directions.
//!
//! A route is built from named, straight [Segments](Segment) between [Points](Point).
//! Consecutive segments with the same name (e.g. parts of one street) are grouped
//! into [Features](Feature), and a [Route] keeps both views consistent as it grows.
//! A [DirectionsFormatter] then describes a route feature by feature, classifying
//! heading changes into [turns](Turn).
//!
//! Distances and headings use a flat-earth approximation, only accurate around
//! a small area (see [KM_PER_DEGREE_LATITUDE]).
//!
//! All types are immutable; appending to a [Feature] or a [Route] returns a new value,
//! structurally sharing everything with the original one.
//!
//! # Example
//!
//! ```
//! use routedir::{DirectionsFormatter, DrivingFormatter, Point, Route, Segment};
//!
//! let a = Point::new(32_783_098, 35_014_528)?;
//! let b = Point::new(32_783_098, 35_024_528)?;
//! let c = Point::new(32_793_098, 35_024_528)?;
//!
//! let route = Route::new(Segment::new("Main St", a, b)?)
//!     .append(Segment::new("Oak Ave", b, c)?)?;
//!
//! assert_eq!(
//!     DrivingFormatter.compute_directions(&route, 90.0),
//!     "Continue onto Main St and go 0.9 kilometers.\n\
//!      Turn left onto Oak Ave and go 1.1 kilometers.\n",
//! );
//! # Ok::<(), routedir::Error>(())
//! ```

mod chain;
mod directions;
mod error;
mod feature;
mod point;
mod route;
mod segment;

pub use chain::Iter;
pub use directions::{
    classify_turn, DirectionsFormatter, DrivingFormatter, Turn, WalkingFormatter,
    WALKING_MINUTES_PER_KM,
};
pub use error::Error;
pub use feature::Feature;
pub use point::{
    Point, KM_PER_DEGREE_LATITUDE, KM_PER_DEGREE_LONGITUDE, MAX_LATITUDE, MAX_LONGITUDE,
    MIN_LATITUDE, MIN_LONGITUDE,
};
pub use route::Route;
pub use segment::Segment;

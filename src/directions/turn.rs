// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;

/// Categorized change of heading between two consecutive [Features](crate::Feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Heading changes by less than 10°.
    Continue,

    /// Heading changes by at least 10°, but less than 60°.
    SlightLeft,
    SlightRight,

    /// Heading changes by at least 60°, but less than 120°.
    Left,
    Right,

    /// Heading changes by at least 120°, but less than 179°.
    SharpLeft,
    SharpRight,

    /// Heading changes by 179° or more.
    UTurn,
}

impl Turn {
    /// Returns the English instruction for this turn, e.g. "Turn slight left".
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::SlightLeft => "Turn slight left",
            Self::SlightRight => "Turn slight right",
            Self::Left => "Turn left",
            Self::Right => "Turn right",
            Self::SharpLeft => "Turn sharp left",
            Self::SharpRight => "Turn sharp right",
            Self::UTurn => "U-turn",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the change from `orig_heading` to `new_heading` (both compass
/// headings in degrees, in the range [0, 360)) into a [Turn].
///
/// The magnitude is the shortest angle between the headings:
///
/// | angle        | turn                  |
/// |--------------|-----------------------|
/// | [0, 10)      | [Turn::Continue]      |
/// | [10, 60)     | slight left or right  |
/// | [60, 120)    | left or right         |
/// | [120, 179)   | sharp left or right   |
/// | [179, 180]   | [Turn::UTurn]         |
///
/// The turn goes to the right if the new heading is at most 180° clockwise from
/// the original heading, and to the left otherwise. This also holds across north,
/// so going from 350° to 10° is a slight right turn.
pub fn classify_turn(orig_heading: f64, new_heading: f64) -> Turn {
    debug_assert!((0.0..360.0).contains(&orig_heading));
    debug_assert!((0.0..360.0).contains(&new_heading));

    let diff = (new_heading - orig_heading).abs();
    let angle = diff.min(360.0 - diff);
    let right = (new_heading - orig_heading).rem_euclid(360.0) <= 180.0;

    match (angle, right) {
        (a, _) if a < 10.0 => Turn::Continue,
        (a, true) if a < 60.0 => Turn::SlightRight,
        (a, false) if a < 60.0 => Turn::SlightLeft,
        (a, true) if a < 120.0 => Turn::Right,
        (a, false) if a < 120.0 => Turn::Left,
        (a, true) if a < 179.0 => Turn::SharpRight,
        (a, false) if a < 179.0 => Turn::SharpLeft,
        _ => Turn::UTurn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_heading_is_continue() {
        for h in [0.0, 0.5, 45.0, 90.0, 179.9, 180.0, 180.1, 270.0, 359.9] {
            assert_eq!(classify_turn(h, h), Turn::Continue, "heading {h}");
        }
    }

    #[test]
    fn bands() {
        assert_eq!(classify_turn(0.0, 9.99), Turn::Continue);
        assert_eq!(classify_turn(0.0, 10.0), Turn::SlightRight);
        assert_eq!(classify_turn(0.0, 59.99), Turn::SlightRight);
        assert_eq!(classify_turn(0.0, 60.0), Turn::Right);
        assert_eq!(classify_turn(0.0, 119.99), Turn::Right);
        assert_eq!(classify_turn(0.0, 120.0), Turn::SharpRight);
        assert_eq!(classify_turn(0.0, 178.99), Turn::SharpRight);
        assert_eq!(classify_turn(0.0, 179.0), Turn::UTurn);
        assert_eq!(classify_turn(0.0, 180.0), Turn::UTurn);
        assert_eq!(classify_turn(0.0, 181.0), Turn::UTurn);
        assert_eq!(classify_turn(0.0, 181.01), Turn::SharpLeft);
        assert_eq!(classify_turn(0.0, 240.0), Turn::SharpLeft);
        assert_eq!(classify_turn(0.0, 240.01), Turn::Left);
        assert_eq!(classify_turn(0.0, 300.0), Turn::Left);
        assert_eq!(classify_turn(0.0, 300.01), Turn::SlightLeft);
        assert_eq!(classify_turn(0.0, 350.0), Turn::SlightLeft);
        assert_eq!(classify_turn(0.0, 350.01), Turn::Continue);
    }

    #[test]
    fn across_north() {
        assert_eq!(classify_turn(350.0, 10.0), Turn::SlightRight);
        assert_eq!(classify_turn(10.0, 350.0), Turn::SlightLeft);
        assert_eq!(classify_turn(300.0, 30.0), Turn::Right);
        assert_eq!(classify_turn(30.0, 300.0), Turn::Left);
        assert_eq!(classify_turn(355.0, 2.0), Turn::Continue);
    }

    #[test]
    fn both_sides() {
        assert_eq!(classify_turn(90.0, 180.0), Turn::Right);
        assert_eq!(classify_turn(90.0, 0.0), Turn::Left);
        assert_eq!(classify_turn(270.0, 0.0), Turn::Right);
        assert_eq!(classify_turn(270.0, 180.0), Turn::Left);
        assert_eq!(classify_turn(200.0, 50.0), Turn::SharpLeft);
        assert_eq!(classify_turn(200.0, 340.0), Turn::SharpRight);
    }

    #[test]
    fn strings() {
        assert_eq!(classify_turn(0.0, 179.0).to_string(), "U-turn");
        assert_eq!(classify_turn(350.0, 10.0).to_string(), "Turn slight right");
        assert_eq!(classify_turn(10.0, 350.0).to_string(), "Turn slight left");
        assert_eq!(classify_turn(45.0, 45.0).to_string(), "Continue");
        assert_eq!(Turn::Left.as_str(), "Turn left");
        assert_eq!(Turn::SharpRight.as_str(), "Turn sharp right");
    }
}

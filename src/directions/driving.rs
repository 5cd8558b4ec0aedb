// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{classify_turn, DirectionsFormatter};
use crate::Feature;

/// Generates directions for drivers, with feature lengths in kilometers:
///
/// ```text
/// Turn left onto Penny Lane and go 0.9 kilometers.
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrivingFormatter;

impl DirectionsFormatter for DrivingFormatter {
    fn render_feature_line(&self, feature: &Feature, prior_heading: f64) -> String {
        format!(
            "{} onto {} and go {:.1} kilometers.\n",
            classify_turn(prior_heading, feature.start_heading()),
            feature.name(),
            feature.length(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Route, Segment};

    fn p(lat: i32, lon: i32) -> Point {
        Point::new(lat, lon).unwrap()
    }

    #[test]
    fn render_feature_line() {
        // 0.01° of latitude ≈ 1.1 km
        let f = Feature::new(Segment::new("Penny Lane", p(0, 0), p(10_000, 0)).unwrap());
        assert_eq!(
            DrivingFormatter.render_feature_line(&f, 90.0),
            "Turn left onto Penny Lane and go 1.1 kilometers.\n"
        );
        assert_eq!(
            DrivingFormatter.render_feature_line(&f, 0.0),
            "Continue onto Penny Lane and go 1.1 kilometers.\n"
        );
    }

    #[test]
    fn compute_directions() {
        let r = Route::from_segments([
            Segment::new("Main St", p(0, 0), p(0, 1)).unwrap(),
            Segment::new("Main St", p(0, 1), p(0, 2)).unwrap(),
            Segment::new("Oak Ave", p(0, 2), p(0, 3)).unwrap(),
        ])
        .unwrap()
        .unwrap();

        assert_eq!(
            DrivingFormatter.compute_directions(&r, 90.0),
            "Continue onto Main St and go 0.0 kilometers.\n\
             Continue onto Oak Ave and go 0.0 kilometers.\n"
        );
    }

    #[test]
    fn compute_directions_with_turns() {
        //             (20000,10000)
        //                  │ Broadway
        // (0,0)──Main St──(0,10000)
        //                  │ Oak Ave
        //             (-10000,10000)
        let r = Route::from_segments([
            Segment::new("Main St", p(0, 0), p(0, 5_000)).unwrap(),
            Segment::new("Main St", p(0, 5_000), p(0, 10_000)).unwrap(),
            Segment::new("Broadway", p(0, 10_000), p(20_000, 10_000)).unwrap(),
        ])
        .unwrap()
        .unwrap();

        assert_eq!(
            DrivingFormatter.compute_directions(&r, 180.0),
            "Turn left onto Main St and go 0.9 kilometers.\n\
             Turn left onto Broadway and go 2.2 kilometers.\n"
        );

        let r = r
            .append(Segment::new("Broadway", p(20_000, 10_000), p(0, 10_000)).unwrap())
            .unwrap()
            .append(Segment::new("Oak Ave", p(0, 10_000), p(-10_000, 10_000)).unwrap())
            .unwrap();

        assert_eq!(
            DrivingFormatter.compute_directions(&r, 90.0),
            "Continue onto Main St and go 0.9 kilometers.\n\
             Turn left onto Broadway and go 4.4 kilometers.\n\
             Continue onto Oak Ave and go 1.1 kilometers.\n"
        );
    }
}

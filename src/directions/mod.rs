// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod driving;
mod turn;
mod walking;

pub use driving::DrivingFormatter;
pub use turn::{classify_turn, Turn};
pub use walking::{WalkingFormatter, WALKING_MINUTES_PER_KM};

use crate::{Feature, Route};

/// Describes how to turn a [Route] into human-readable, turn-by-turn directions.
///
/// Implementors only need to provide [DirectionsFormatter::render_feature_line],
/// which describes how to traverse a single [Feature]; walking over the route
/// and tracking headings is done by [DirectionsFormatter::compute_directions].
pub trait DirectionsFormatter {
    /// Returns a newline-terminated line describing how to traverse
    /// the provided [Feature], when arriving at its start with `prior_heading`.
    ///
    /// Use [classify_turn] with `prior_heading` and [Feature::start_heading]
    /// to describe the turn onto the feature.
    fn render_feature_line(&self, feature: &Feature, prior_heading: f64) -> String;

    /// Returns directions for following the provided [Route] from its start,
    /// initially facing `heading` (compass degrees, in the range [0, 360)).
    ///
    /// Every [Feature] of the route is described by exactly one line. The heading before
    /// each subsequent feature is the [end heading](Feature::end_heading) of the previous one.
    fn compute_directions(&self, route: &Route, heading: f64) -> String {
        log::debug!(
            "computing directions for {} features, initial heading {heading:.1}",
            route.feature_count()
        );

        let mut directions = String::new();
        let mut prior_heading = heading;
        for feature in route.features() {
            let line = self.render_feature_line(feature, prior_heading);
            log::debug!("{}: {}", feature.name(), line.trim_end());
            directions.push_str(&line);
            prior_heading = feature.end_heading();
        }
        directions
    }
}

impl<T: DirectionsFormatter + ?Sized> DirectionsFormatter for &T {
    fn render_feature_line(&self, feature: &Feature, prior_heading: f64) -> String {
        (**self).render_feature_line(feature, prior_heading)
    }
}

impl<T: DirectionsFormatter + ?Sized> DirectionsFormatter for Box<T> {
    fn render_feature_line(&self, feature: &Feature, prior_heading: f64) -> String {
        (**self).render_feature_line(feature, prior_heading)
    }
}

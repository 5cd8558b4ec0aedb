// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{classify_turn, DirectionsFormatter};
use crate::Feature;

/// Default walking pace, in minutes per kilometer (5 km/h).
pub const WALKING_MINUTES_PER_KM: f64 = 12.0;

/// Generates directions for pedestrians, with the time needed
/// to walk every feature, rounded to whole minutes:
///
/// ```text
/// Turn left onto Penny Lane and walk for 11 minutes.
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingFormatter {
    /// Walking pace, in minutes per kilometer. Must be finite and positive.
    pub minutes_per_km: f64,
}

impl Default for WalkingFormatter {
    fn default() -> Self {
        Self {
            minutes_per_km: WALKING_MINUTES_PER_KM,
        }
    }
}

impl DirectionsFormatter for WalkingFormatter {
    fn render_feature_line(&self, feature: &Feature, prior_heading: f64) -> String {
        let minutes = (feature.length() * self.minutes_per_km).round() as u64;
        format!(
            "{} onto {} and walk for {} minutes.\n",
            classify_turn(prior_heading, feature.start_heading()),
            feature.name(),
            minutes,
        )
    }
}

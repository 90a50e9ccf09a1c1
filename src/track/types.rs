use serde::Serialize;

use crate::nmea::Fix;

/// Derived kinematics for one fix, index-aligned with the trajectory.
///
/// Index 0 carries the zero baseline; every later sample describes the
/// pair formed with the preceding fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KinematicSample {
    pub distance_increment_km: f64,
    pub cumulative_distance_km: f64,
    pub speed_kmh: f64,
    pub acceleration_ms2: f64,
}

impl KinematicSample {
    /// Sample for a fix with no predecessor.
    pub fn baseline() -> Self {
        Self {
            distance_increment_km: 0.0,
            cumulative_distance_km: 0.0,
            speed_kmh: 0.0,
            acceleration_ms2: 0.0,
        }
    }
}

/// One trajectory point with its derived kinematics.
///
/// This is the flat record handed to downstream consumers (map or chart
/// renderers, exports); nothing feeds back into the pipeline.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackPoint {
    #[serde(flatten)]
    pub fix: Fix,
    #[serde(flatten)]
    pub kinematics: KinematicSample,
}

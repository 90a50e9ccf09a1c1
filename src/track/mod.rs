mod error;
mod geo;
mod kinematics;
mod types;

pub use error::TrackError;
pub use geo::{distance_km, EARTH_RADIUS_KM};
pub use kinematics::{build_track, derive_samples};
pub use types::{KinematicSample, TrackPoint};

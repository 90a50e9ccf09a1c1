use chrono::NaiveTime;

use super::error::TrackError;
use super::geo::distance_km;
use super::types::{KinematicSample, TrackPoint};
use crate::nmea::Fix;

// 1 km/h^2 = 1000 m / (3600 s)^2 = 1/12960 m/s^2
const KMH2_PER_MS2: f64 = 12960.0;

/// Derive one kinematic sample per fix, index-aligned with the input.
///
/// The first sample is the zero baseline. Speed is clamped to 0 when the
/// elapsed time between two fixes is non-positive (the source format has
/// no date field, so time can regress near midnight or in out-of-order
/// logs); the distance increment still accumulates. Acceleration needs a
/// prior speed sample and the same positive elapsed time, and is 0
/// otherwise.
pub fn derive_samples(fixes: &[Fix]) -> Vec<KinematicSample> {
    let mut samples = Vec::with_capacity(fixes.len());
    if fixes.is_empty() {
        return samples;
    }

    samples.push(KinematicSample::baseline());

    for i in 1..fixes.len() {
        let prev = &fixes[i - 1];
        let next = &fixes[i];

        let increment = distance_km(
            prev.latitude_deg,
            prev.longitude_deg,
            next.latitude_deg,
            next.longitude_deg,
        );
        let hours = elapsed_hours(prev.timestamp, next.timestamp);
        let speed_kmh = if hours > 0.0 { increment / hours } else { 0.0 };

        let previous = samples[i - 1];
        let acceleration_ms2 = if i >= 2 && hours > 0.0 {
            (speed_kmh - previous.speed_kmh) / hours / KMH2_PER_MS2
        } else {
            0.0
        };

        samples.push(KinematicSample {
            distance_increment_km: increment,
            cumulative_distance_km: previous.cumulative_distance_km + increment,
            speed_kmh,
            acceleration_ms2,
        });
    }

    samples
}

/// Pair every fix with its derived sample.
pub fn build_track(fixes: Vec<Fix>) -> Result<Vec<TrackPoint>, TrackError> {
    if fixes.is_empty() {
        return Err(TrackError::NoData);
    }

    let samples = derive_samples(&fixes);
    Ok(fixes
        .into_iter()
        .zip(samples)
        .map(|(fix, kinematics)| TrackPoint { fix, kinematics })
        .collect())
}

/// Signed elapsed time in fractional hours between two times of day.
///
/// `NaiveTime` subtraction never wraps around midnight, so a regression
/// shows up as a negative delta and is kept as such.
fn elapsed_hours(earlier: NaiveTime, later: NaiveTime) -> f64 {
    let delta = later.signed_duration_since(earlier);
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) * 1e-9;
    seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nmea::scan_log;

    fn fix(lat: f64, lon: f64, h: u32, m: u32, s: u32) -> Fix {
        Fix {
            latitude_deg: lat,
            longitude_deg: lon,
            timestamp: NaiveTime::from_hms_opt(h, m, s).unwrap(),
        }
    }

    #[test]
    fn empty_trajectory_signals_no_data() {
        assert!(derive_samples(&[]).is_empty());
        assert!(matches!(build_track(Vec::new()), Err(TrackError::NoData)));
    }

    #[test]
    fn single_fix_yields_the_zero_baseline() {
        let samples = derive_samples(&[fix(48.0, 2.0, 12, 0, 0)]);
        assert_eq!(samples, vec![KinematicSample::baseline()]);
    }

    #[test]
    fn two_sentence_log_end_to_end() {
        let log = "$GPGGA,120000.00,4852.1234,N,00220.5678,E,1,08,0.9,35.0,M,46.9,M,,\n\
                   $GPGGA,120010.00,4852.2234,N,00220.6678,E,1,08,0.9,35.0,M,46.9,M,,\n";
        let report = scan_log(log);
        assert_eq!(report.fixes.len(), 2);

        let points = build_track(report.fixes).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].kinematics, KinematicSample::baseline());

        let second = points[1].kinematics;
        // 0.1 arcminute steps in both axes near 48.87N, ~222 m apart
        assert!((second.distance_increment_km - 0.221823).abs() < 1e-5);
        assert!(second.cumulative_distance_km > 0.0);
        assert!(
            (second.speed_kmh - second.distance_increment_km / (10.0 / 3600.0)).abs() < 1e-9
        );
        assert!((second.speed_kmh - 79.856).abs() < 1e-2);
        assert_eq!(second.acceleration_ms2, 0.0);
    }

    #[test]
    fn identical_timestamps_clamp_speed_and_acceleration() {
        let fixes = vec![fix(48.0, 2.0, 12, 0, 0), fix(48.001, 2.001, 12, 0, 0)];
        let samples = derive_samples(&fixes);
        assert!(samples[1].distance_increment_km > 0.0);
        assert_eq!(samples[1].speed_kmh, 0.0);
        assert_eq!(samples[1].acceleration_ms2, 0.0);
    }

    #[test]
    fn time_regression_clamps_speed_but_distance_still_accumulates() {
        let fixes = vec![fix(48.0, 2.0, 12, 0, 10), fix(48.001, 2.001, 12, 0, 0)];
        let samples = derive_samples(&fixes);
        assert_eq!(samples[1].speed_kmh, 0.0);
        assert!(samples[1].cumulative_distance_km > 0.0);
    }

    #[test]
    fn cumulative_distance_never_decreases() {
        let fixes = vec![
            fix(48.0, 2.0, 12, 0, 0),
            fix(48.01, 2.01, 12, 0, 10),
            fix(48.0, 2.0, 12, 0, 5),
            fix(48.02, 2.02, 12, 0, 30),
        ];
        let samples = derive_samples(&fixes);
        assert_eq!(samples.len(), fixes.len());
        for pair in samples.windows(2) {
            assert!(pair[1].cumulative_distance_km >= pair[0].cumulative_distance_km);
        }
    }

    #[test]
    fn acceleration_follows_the_speed_difference() {
        // Each step doubles the per-pair distance over the same 10 s
        let fixes = vec![
            fix(48.868723, 2.342797, 12, 0, 0),
            fix(48.870390, 2.344463, 12, 0, 10),
            fix(48.873723, 2.347797, 12, 0, 20),
        ];
        let samples = derive_samples(&fixes);
        assert_eq!(samples[1].acceleration_ms2, 0.0);

        let dt_hours = 10.0 / 3600.0;
        let expected = (samples[2].speed_kmh - samples[1].speed_kmh) / dt_hours / 12960.0;
        assert!(samples[2].acceleration_ms2 > 0.0);
        assert!((samples[2].acceleration_ms2 - expected).abs() < 1e-12);
    }

    #[test]
    fn sub_second_deltas_use_the_fractional_part() {
        let log = "$GPGGA,120000.25,4852.1234,N,00220.5678,E,1,08\n\
                   $GPGGA,120000.75,4852.1334,N,00220.5778,E,1,08\n";
        let points = build_track(scan_log(log).fixes).unwrap();
        let second = points[1].kinematics;
        assert!(second.speed_kmh > 0.0);
        assert!(
            (second.speed_kmh - second.distance_increment_km / (0.5 / 3600.0)).abs() < 1e-9
        );
    }
}

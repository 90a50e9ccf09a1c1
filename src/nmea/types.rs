use chrono::NaiveTime;
use serde::Serialize;

use super::error::SentenceError;

/// One decoded position report.
///
/// The source format carries no date component, so `timestamp` is a bare
/// time of day and all time arithmetic downstream is relative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fix {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub timestamp: NaiveTime,
}

/// A filtered sentence the extractor refused, with the reason.
#[derive(Debug)]
pub struct RejectedLine {
    pub line: String,
    pub error: SentenceError,
}

/// Result of scanning one log: the trajectory plus everything skipped.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub fixes: Vec<Fix>,
    pub rejected: Vec<RejectedLine>,
}

use chrono::NaiveTime;
use log::{info, warn};

use super::error::SentenceError;
use super::filter::filter_sentences;
use super::types::{Fix, RejectedLine, ScanReport};

const MIN_FIELDS: usize = 6;
const TIME_FORMAT: &str = "%H%M%S%.f";

/// Scan a whole log: filter the fix sentences and decode each one.
///
/// A sentence that fails to decode is recorded in the report and skipped;
/// it never shifts the position of surrounding fixes.
pub fn scan_log(content: &str) -> ScanReport {
    let mut report = ScanReport::default();

    for line in filter_sentences(content) {
        match parse_fix(line) {
            Ok(fix) => report.fixes.push(fix),
            Err(error) => {
                warn!("Skipping sentence {:?}: {}", line, error);
                report.rejected.push(RejectedLine {
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        "Decoded {} fixes, skipped {} sentences",
        report.fixes.len(),
        report.rejected.len()
    );
    report
}

/// Decode one fix sentence.
///
/// Field order: tag, time of day, latitude magnitude, N/S flag, longitude
/// magnitude, E/W flag. Everything after field 5 is ignored.
pub fn parse_fix(line: &str) -> Result<Fix, SentenceError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(SentenceError::TooFewFields(fields.len()));
    }

    // On-wire sentences carry a leading $, bare tags appear in pre-split logs
    let tag = fields[0].strip_prefix('$').unwrap_or(fields[0]);
    if !matches!(tag, "GPGGA" | "PGGA") {
        return Err(SentenceError::UnknownTag(fields[0].to_string()));
    }

    let timestamp = NaiveTime::parse_from_str(fields[1], TIME_FORMAT)?;
    let latitude_deg = parse_latitude(fields[2], fields[3])?;
    let longitude_deg = parse_longitude(fields[4], fields[5])?;

    Ok(Fix {
        latitude_deg,
        longitude_deg,
        timestamp,
    })
}

/// Decode a `DDMM.MMMM` magnitude with its N/S hemisphere flag.
fn parse_latitude(magnitude: &str, hemisphere: &str) -> Result<f64, SentenceError> {
    let degrees = parse_sexagesimal(magnitude, 2)?;
    let signed = if hemisphere == "S" { -degrees } else { degrees };
    if !(-90.0..=90.0).contains(&signed) {
        return Err(SentenceError::OutOfRange(signed));
    }
    Ok(signed)
}

/// Decode a `DDDMM.MMMM` magnitude with its E/W hemisphere flag.
fn parse_longitude(magnitude: &str, hemisphere: &str) -> Result<f64, SentenceError> {
    let degrees = parse_sexagesimal(magnitude, 3)?;
    let signed = if hemisphere == "W" { -degrees } else { degrees };
    if !(-180.0..=180.0).contains(&signed) {
        return Err(SentenceError::OutOfRange(signed));
    }
    Ok(signed)
}

/// Whole degrees in the leading characters, decimal minutes in the rest.
fn parse_sexagesimal(magnitude: &str, degree_digits: usize) -> Result<f64, SentenceError> {
    let invalid = || SentenceError::InvalidCoordinate(magnitude.to_string());

    let whole: f64 = magnitude
        .get(..degree_digits)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;
    let minutes: f64 = magnitude
        .get(degree_digits..)
        .ok_or_else(invalid)?
        .parse()
        .map_err(|_| invalid())?;

    Ok(whole + minutes / 60.0)
}

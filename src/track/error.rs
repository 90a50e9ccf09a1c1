use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("no position fixes decoded")]
    NoData,
}

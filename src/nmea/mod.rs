mod error;
mod extractor;
mod filter;
mod types;

pub use error::SentenceError;
pub use extractor::{parse_fix, scan_log};
pub use filter::{filter_sentences, is_fix_sentence};
pub use types::{Fix, RejectedLine, ScanReport};

/// Tag spellings that mark a line as a position-fix sentence.
const FIX_TAGS: [&str; 2] = ["GPGGA", "PGGA"];

/// True if the line carries a position-fix sentence.
///
/// Matching is substring-based and case-sensitive; receivers emit the tag
/// either in full or truncated to `PGGA`.
pub fn is_fix_sentence(line: &str) -> bool {
    FIX_TAGS.iter().any(|tag| line.contains(tag))
}

/// Select the position-fix sentences from a raw log, preserving order.
///
/// Lines of other sentence types are dropped silently; the source log
/// freely interleaves sentences this system does not consume.
pub fn filter_sentences(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| is_fix_sentence(line))
        .collect()
}

//! Pattern counting over fetched bytes.

/// The fixed, case-sensitive pattern every source is searched for.
pub const SEARCH_PATTERN: &[u8] = b"Go";

/// Count non-overlapping occurrences of [`SEARCH_PATTERN`] in `content`.
pub fn count(content: &[u8]) -> u64 {
    count_occurrences(content, SEARCH_PATTERN)
}

/// Count non-overlapping occurrences of `needle` in `haystack` with a single
/// left-to-right scan. After a match the scan resumes past its end.
///
/// An empty needle yields 0.
pub fn count_occurrences(haystack: &[u8], needle: &[u8]) -> u64 {
    let Some((&first, _)) = needle.split_first() else {
        return 0;
    };
    if needle.len() > haystack.len() {
        return 0;
    }

    let last_start = haystack.len() - needle.len();
    let mut count = 0u64;
    let mut i = 0usize;
    while i <= last_start {
        if haystack[i] == first && &haystack[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

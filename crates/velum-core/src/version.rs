//! Dotted version string comparison.

use std::cmp::Ordering;

/// Compares two dotted version strings segment by segment.
///
/// Missing trailing segments weigh as zero, so `"1.0"` equals `"1"`.
/// Segments parse numerically; a segment that is not a number weighs as the
/// code point of its first character. Multi-character alphabetic segments
/// therefore compare by their first character only — a known limitation of
/// the scheme, not something to silently repair.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split('.').collect();
    let right: Vec<&str> = b.split('.').collect();
    for index in 0..left.len().max(right.len()) {
        let l = segment_weight(left.get(index).copied());
        let r = segment_weight(right.get(index).copied());
        if l < r {
            return Ordering::Less;
        }
        if l > r {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

fn segment_weight(segment: Option<&str>) -> f64 {
    let Some(segment) = segment else {
        return 0.0;
    };
    if segment.is_empty() {
        return 0.0;
    }
    match segment.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => segment
            .chars()
            .next()
            .map(|c| f64::from(c as u32))
            .unwrap_or(0.0),
    }
}

//! Small text helpers shared across the workspace.

/// Which side(s) of the input [`trim`] strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrimSide {
    #[default]
    Both,
    Start,
    End,
}

/// Trims `pat` (or whitespace when `None`) from the requested side(s).
///
/// Free-standing on purpose: this replaces a global override of the string
/// type's trim behavior in the system this crate descends from.
pub fn trim(input: &str, pat: Option<char>, side: TrimSide) -> &str {
    match (pat, side) {
        (None, TrimSide::Both) => input.trim(),
        (None, TrimSide::Start) => input.trim_start(),
        (None, TrimSide::End) => input.trim_end(),
        (Some(c), TrimSide::Both) => input.trim_matches(c),
        (Some(c), TrimSide::Start) => input.trim_start_matches(c),
        (Some(c), TrimSide::End) => input.trim_end_matches(c),
    }
}

const SIZE_UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with binary-1024 units and three significant digits.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_owned();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let digits = if value >= 100.0 {
        format!("{value:.0}")
    } else if value >= 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    };
    format!("{digits} {}", SIZE_UNITS[exponent])
}

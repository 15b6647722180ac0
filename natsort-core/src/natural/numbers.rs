//! Magnitude ordering for numeric runs
//!
//! A run is an optional minus sign followed by digits and dots. It is read as
//! a sign and a list of dot-separated digit segments, each compared as an
//! unbounded integer. Runs without a dot compare exactly like numbers; runs
//! with dots compare like version strings, so "1.2" < "1.10".

use std::cmp::Ordering;

/// Whether the run holds at least one digit. Runs like "." or "-." do not,
/// and compare as plain text instead.
pub fn has_digits(run: &str) -> bool {
    run.bytes().any(|b| b.is_ascii_digit())
}

fn is_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0' || b == b'.')
}

/// Splits a run into its sign and unsigned part. Zero is never negative.
fn signed(run: &str) -> (bool, &str) {
    match run.strip_prefix('-') {
        Some(digits) => (!is_zero(digits), digits),
        None => (false, run),
    }
}

fn segments(digits: &str) -> std::str::Split<'_, char> {
    digits.trim_end_matches('.').split('.')
}

/// Compare two digit strings as unbounded integers. Empty reads as zero.
fn cmp_segment(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn cmp_magnitude(left: &str, right: &str) -> Ordering {
    let mut left = segments(left);
    let mut right = segments(right);
    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => cmp_segment(a, b),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Compare two numeric runs by signed magnitude.
pub fn cmp_runs(left: &str, right: &str) -> Ordering {
    let (left_negative, left_digits) = signed(left);
    let (right_negative, right_digits) = signed(right);
    match (left_negative, right_negative) {
        (false, false) => cmp_magnitude(left_digits, right_digits),
        (true, true) => cmp_magnitude(right_digits, left_digits),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
    }
}

//! Comparator entry points
//!
//! All comparisons go through [`NaturalKey`], so comparing two raw values and
//! sorting precomputed keys always agree.

use super::key::NaturalKey;
use super::value::Value;
use std::cmp::Ordering;

/// Comparator switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Order two values chronologically when both read as different dates.
    pub dates: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { dates: true }
    }
}

/// Ascending natural order of two values.
///
/// Never fails: missing values compare as empty text.
pub fn compare<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> Ordering {
    compare_with(a, b, Options::default())
}

/// Descending natural order; the exact reverse of [`compare`].
pub fn compare_desc<'a, 'b>(a: impl Into<Value<'a>>, b: impl Into<Value<'b>>) -> Ordering {
    compare(a, b).reverse()
}

pub fn compare_text(a: &str, b: &str) -> Ordering {
    compare(a, b)
}

pub fn compare_with<'a, 'b>(
    a: impl Into<Value<'a>>,
    b: impl Into<Value<'b>>,
    options: Options,
) -> Ordering {
    compare_values(&a.into(), &b.into(), options)
}

pub fn compare_values(a: &Value<'_>, b: &Value<'_>, options: Options) -> Ordering {
    let left = NaturalKey::with_options(a.clone(), options);
    let right = NaturalKey::with_options(b.clone(), options);
    left.cmp_natural(&right)
}

/// Three-way integer form of an ordering: -1, 0 or 1.
pub fn sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering::*;

    #[test]
    fn test_numeric_runs_by_magnitude() {
        assert_eq!(compare("file9", "file10"), Less);
        assert_eq!(compare("file10", "file9"), Greater);
    }

    #[test]
    fn test_versions() {
        assert_eq!(compare("v1.2", "v1.10"), Less);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(compare("Apple", "apple"), Equal);
    }

    #[test]
    fn test_missing_reads_empty() {
        assert_eq!(compare(None::<&str>, "abc"), Less);
        assert_eq!(compare("abc", None::<&str>), Greater);
        assert_eq!(compare(None::<&str>, ""), Equal);
    }

    #[test]
    fn test_numbers_and_text_mix() {
        assert_eq!(compare(9, 10), Less);
        assert_eq!(compare(2.5, "10"), Less);
        assert_eq!(compare("1", "a"), Less);
    }

    #[test]
    fn test_dates_take_priority() {
        assert_eq!(compare("2020-01-01", "2021-01-01"), Less);
        // token order would put "feb" first
        assert_eq!(compare("Mar 1, 2020", "Feb 1, 2021"), Less);
        assert_eq!(
            compare_with("Mar 1, 2020", "Feb 1, 2021", Options { dates: false }),
            Greater
        );
    }

    #[test]
    fn test_equal_dates_fall_through_to_tokens() {
        assert_eq!(compare("2020-01-01", "2020-01-01t00:00:00z"), Less);
    }

    #[test]
    fn test_desc_reverses() {
        assert_eq!(compare_desc("file9", "file10"), Greater);
        assert_eq!(compare_desc("a", "a"), Equal);
    }

    #[test]
    fn test_compare_text() {
        assert_eq!(compare_text("Chapter 2", "chapter 11"), Less);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(Less), -1);
        assert_eq!(sign(Equal), 0);
        assert_eq!(sign(Greater), 1);
    }
}

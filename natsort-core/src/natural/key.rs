//! Precomputed comparison keys
//!
//! A [`NaturalKey`] holds everything the comparator derives from one value:
//! the normalized text, its timestamp (when it reads as a date) and its token
//! layout. Building keys once per element makes sorting a slice cheaper than
//! calling the comparator on raw values, and gives the same order.

use super::compare::Options;
use super::dates::parse_timestamp;
use super::numbers;
use super::registry::Direction;
use super::tokens::{self, Token, TokenKind};
use super::value::{normalize, Value};
use std::cmp::Ordering;
use std::ops::Range;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// A numeric run with at least one digit.
    Number(Range<usize>),
    /// A text run, or a numeric run with no digits (".", "-.").
    Raw(Range<usize>),
}

/// Comparison key for one value.
///
/// No `Ord` impl: date priority is not transitive across a mix of date and
/// non-date values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaturalKey {
    text: String,
    timestamp: Option<i64>,
    parts: Vec<Part>,
}

impl NaturalKey {
    pub fn new<'a>(value: impl Into<Value<'a>>) -> Self {
        Self::with_options(value, Options::default())
    }

    pub fn with_options<'a>(value: impl Into<Value<'a>>, options: Options) -> Self {
        let text = normalize(&value.into());
        let timestamp = if options.dates {
            parse_timestamp(&text)
        } else {
            None
        };
        let parts = tokens::spans(&text)
            .into_iter()
            .map(|span| match span.kind {
                TokenKind::Number if numbers::has_digits(&text[span.range.clone()]) => {
                    Part::Number(span.range)
                }
                _ => Part::Raw(span.range),
            })
            .collect();
        NaturalKey {
            text,
            timestamp,
            parts,
        }
    }

    /// The normalized (lower-cased) text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Milliseconds since the epoch when the text reads as a date.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    pub fn tokens(&self) -> Vec<Token<'_>> {
        tokens::tokenize(&self.text)
    }

    /// Natural ordering of two keys.
    ///
    /// Differing timestamps decide first. Otherwise token positions are
    /// compared in order; a missing position sorts before a present one,
    /// numbers before digitless numeric runs, numbers by magnitude and
    /// everything else by text.
    pub fn cmp_natural(&self, other: &Self) -> Ordering {
        if let (Some(left), Some(right)) = (self.timestamp, other.timestamp) {
            if left != right {
                trace!(left, right, "ordered by timestamp");
                return left.cmp(&right);
            }
        }

        let mut left = self.parts.iter();
        let mut right = other.parts.iter();
        loop {
            let ordering = match (left.next(), right.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => self.cmp_part(a, other, b),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
    }

    fn cmp_part(&self, part: &Part, other: &Self, other_part: &Part) -> Ordering {
        match (part, other_part) {
            (Part::Number(a), Part::Number(b)) => {
                numbers::cmp_runs(&self.text[a.clone()], &other.text[b.clone()])
            }
            (Part::Number(_), Part::Raw(_)) => Ordering::Less,
            (Part::Raw(_), Part::Number(_)) => Ordering::Greater,
            (Part::Raw(a), Part::Raw(b)) => self.text[a.clone()].cmp(&other.text[b.clone()]),
        }
    }
}

/// Stable merge sort that tolerates comparators without a total order.
///
/// Date priority can order three values in a cycle, and `slice::sort_by` may
/// panic on that. This sort never inspects the relation beyond single
/// comparisons, so a cycle only yields some permutation of the input.
pub(crate) fn merge_sort_by<T, F>(items: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(items, &mut cmp)
}

fn merge_sort<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // ties take from the left half to stay stable
        let take_right = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => cmp(a, b) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Input positions of `keys` in sorted order.
pub(crate) fn sorted_positions(keys: &[NaturalKey], direction: Direction) -> Vec<usize> {
    merge_sort_by((0..keys.len()).collect(), |&a, &b| {
        direction.apply(keys[a].cmp_natural(&keys[b]))
    })
}

/// Stable sort of owned items by a key derived from each item.
///
/// Each key is built once. Equal items keep their input order, and inputs
/// whose dates and texts disagree still sort without panicking.
pub fn sort_by_natural_key<T, F>(items: &mut Vec<T>, direction: Direction, mut key_of: F)
where
    F: FnMut(&T) -> NaturalKey,
{
    let keyed: Vec<(NaturalKey, T)> = std::mem::take(items)
        .into_iter()
        .map(|item| (key_of(&item), item))
        .collect();
    let sorted = merge_sort_by(keyed, |(a, _), (b, _)| direction.apply(a.cmp_natural(b)));
    items.extend(sorted.into_iter().map(|(_, item)| item));
}

/// Sort strings in ascending natural order.
pub fn sort<T: AsRef<str>>(items: &mut Vec<T>) {
    sort_by_natural_key(items, Direction::Ascending, |item| {
        NaturalKey::new(item.as_ref())
    });
}

/// Sort strings in descending natural order.
pub fn sort_desc<T: AsRef<str>>(items: &mut Vec<T>) {
    sort_by_natural_key(items, Direction::Descending, |item| {
        NaturalKey::new(item.as_ref())
    });
}

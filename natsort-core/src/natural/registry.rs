//! Sort-type registry
//!
//! Table columns declare how they sort by name, e.g. `natural-asc`. The
//! registry maps those names to comparators. It is built explicitly by
//! whoever owns the table configuration; nothing is registered globally.

use super::compare::{compare_values, sign, Options};
use super::key::{merge_sort_by, sorted_positions, NaturalKey};
use super::value::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors raised by registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Sort type '{0}' not found")]
    SortTypeNotFound(String),
    #[error("Invalid sort direction '{0}' (expected 'asc' or 'desc')")]
    InvalidDirection(String),
}

/// Sort direction of a named sort type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Name suffix used by registered sort types (`asc` / `desc`).
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Turn an ascending ordering into this direction's ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// [`Direction::apply`] as -1, 0 or 1.
    pub fn sign(self, ordering: Ordering) -> i32 {
        sign(self.apply(ordering))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Direction {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(RegistryError::InvalidDirection(s.to_string())),
        }
    }
}

/// A named comparator a column can sort by.
pub trait SortType: Send + Sync {
    /// Registered name (e.g. "natural-asc")
    fn name(&self) -> &str;

    fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering;

    fn description(&self) -> &str {
        ""
    }

    /// Positions of `values` in sorted order, ties kept in input order.
    ///
    /// Comparators here need not be transitive, so this never relies on a
    /// total order the way `slice::sort_by` does.
    fn sort_order(&self, values: &[Value<'_>]) -> Vec<usize> {
        merge_sort_by((0..values.len()).collect(), |&a, &b| {
            self.compare(&values[a], &values[b])
        })
    }
}

/// The natural-sort comparator in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Natural {
    direction: Direction,
    options: Options,
}

impl Natural {
    pub fn new(direction: Direction) -> Self {
        Self::with_options(direction, Options::default())
    }

    pub fn with_options(direction: Direction, options: Options) -> Self {
        Natural { direction, options }
    }

    pub fn ascending() -> Self {
        Self::new(Direction::Ascending)
    }

    pub fn descending() -> Self {
        Self::new(Direction::Descending)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl SortType for Natural {
    fn name(&self) -> &str {
        match self.direction {
            Direction::Ascending => "natural-asc",
            Direction::Descending => "natural-desc",
        }
    }

    fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        self.direction.apply(compare_values(a, b, self.options))
    }

    fn description(&self) -> &str {
        match self.direction {
            Direction::Ascending => "Natural order: numbers by magnitude, dates by time",
            Direction::Descending => "Natural order, reversed",
        }
    }

    fn sort_order(&self, values: &[Value<'_>]) -> Vec<usize> {
        let keys: Vec<NaturalKey> = values
            .iter()
            .map(|value| NaturalKey::with_options(value.clone(), self.options))
            .collect();
        sorted_positions(&keys, self.direction)
    }
}

/// Registry of sort types, keyed by name.
pub struct SortTypeRegistry {
    sort_types: HashMap<String, Box<dyn SortType>>,
}

impl SortTypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        SortTypeRegistry {
            sort_types: HashMap::new(),
        }
    }

    /// Register a sort type
    ///
    /// If a sort type with the same name already exists, it will be replaced.
    pub fn register<S: SortType + 'static>(&mut self, sort_type: S) {
        let name = sort_type.name().to_string();
        debug!(sort_type = %name, "registering sort type");
        self.sort_types.insert(name, Box::new(sort_type));
    }

    pub fn get(&self, name: &str) -> Option<&dyn SortType> {
        self.sort_types.get(name).map(|s| s.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.sort_types.contains_key(name)
    }

    /// Resolve a base type plus direction, e.g. ("natural", Descending) to
    /// `natural-desc`.
    pub fn lookup(&self, base: &str, direction: Direction) -> Result<&dyn SortType, RegistryError> {
        let name = format!("{base}-{}", direction.suffix());
        self.get(&name)
            .ok_or(RegistryError::SortTypeNotFound(name))
    }

    /// Compare two values with the named sort type
    pub fn compare(
        &self,
        name: &str,
        a: &Value<'_>,
        b: &Value<'_>,
    ) -> Result<Ordering, RegistryError> {
        let sort_type = self
            .get(name)
            .ok_or_else(|| RegistryError::SortTypeNotFound(name.to_string()))?;
        Ok(sort_type.compare(a, b))
    }

    /// List all registered names (sorted)
    pub fn list_types(&self) -> Vec<String> {
        let mut names: Vec<_> = self.sort_types.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry with both natural variants using the given options.
    pub fn with_options(options: Options) -> Self {
        let mut registry = Self::new();
        registry.register(Natural::with_options(Direction::Ascending, options));
        registry.register(Natural::with_options(Direction::Descending, options));
        registry
    }

    /// Registry with `natural-asc` and `natural-desc`
    pub fn with_defaults() -> Self {
        Self::with_options(Options::default())
    }
}

impl Default for SortTypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

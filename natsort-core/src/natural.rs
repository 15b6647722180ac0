//! Natural-sort comparator
//!
//! Values are lower-cased, checked for a calendar date, and otherwise split
//! into alternating text and numeric runs that are compared position by
//! position:
//!
//!     "file9"  -> ["file", "9", ""]
//!     "file10" -> ["file", "10", ""]
//!
//! so "file9" sorts before "file10". When both values are dates that differ,
//! the chronological order wins over the token order.
//!
//! Layout:
//!
//!     value     - the comparable input and its textual form
//!     tokens    - numeric-run splitting
//!     numbers   - magnitude ordering of numeric runs
//!     dates     - date detection
//!     key       - precomputed comparison keys and slice sorting
//!     compare   - the comparator entry points
//!     registry  - named sort types (ascending/descending variants)

pub mod compare;
pub mod dates;
pub mod key;
pub mod numbers;
pub mod registry;
pub mod tokens;
pub mod value;

pub use compare::{compare, compare_desc, compare_text, compare_values, compare_with, sign, Options};
pub use dates::parse_timestamp;
pub use key::{sort, sort_by_natural_key, sort_desc, NaturalKey};
pub use registry::{Direction, Natural, RegistryError, SortType, SortTypeRegistry};
pub use tokens::{tokenize, Token, TokenKind};
pub use value::{normalize, Value};

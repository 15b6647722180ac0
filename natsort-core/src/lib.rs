//! # natsort
//!
//! Natural ordering for text that mixes words, numbers and dates.
//!
//! The comparator lives in [`natural`]; table-like consumers pick it up by
//! name through a [`natural::SortTypeRegistry`] instead of a process-wide
//! table.

pub mod natural;

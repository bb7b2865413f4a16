//! # `named-record` - a mutable named integer record
//!
//! ## Design goals
//!
//! * Provide the record shape a storage layer reads and writes, nothing more.
//! * No validation: any name (including empty) and the full `i32` range are
//!   accepted.
//! * The crate should have a minimal dependency footprint.
//!
//! ## Usage guide
//!
//! ### Example
//!
//! ```rust
//! use named_record::Record;
//!
//! let mut record = Record::new("widget");
//! assert_eq!(record.value(), 0);
//!
//! record.set_value(42);
//! assert_eq!(record.to_string(), "widget value: 42");
//! ```
//!
//! ### Sharing
//!
//! `Record` has no internal synchronization. Mutation goes through `&mut`, so
//! a single owner is race-free by construction; to share one instance between
//! threads wrap it in the synchronization primitive of the surrounding system
//! (for example `Arc<Mutex<Record>>`).

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod record;

pub use record::Record;

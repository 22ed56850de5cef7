//! Spreadsheet-backed record storage subsystem.
//!
//! # Data Flow
//! ```text
//! Request handler
//!     → read_records(path)   (materialize the whole collection)
//!     → mutate Vec<Record> in memory
//!     → write_records(path)  (overwrite the whole file)
//! ```
//!
//! # Design Decisions
//! - The file is the only durable state; nothing is cached between requests
//! - A missing file reads as an empty collection, not an error
//! - Writes always produce a fresh single-sheet workbook
//! - No locking: concurrent writers race and the last write wins (known gap)

pub mod record;
pub mod xlsx;

pub use record::Record;
pub use xlsx::{read_records, write_records, StoreError};

//! studytrack-store: persistence for courses and exam attempts.
//!
//! Storage is append/delete only: courses are created and deleted, exams are
//! appended. Readers always reload the full course collection after a write
//! instead of patching what they hold.

pub mod demo;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use demo::seed_demo_data;
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use store::{CourseStore, CourseStoreExt, Deletion};

//! Store implementations of the `WhiteboardRepository` trait.
//!
//! - `inmemory`: HashMap-backed store for single-process deployments and
//!   tests. A DBMS-backed implementation would slot in behind the same
//!   trait.

pub mod inmemory;

pub use inmemory::InMemoryWhiteboardRepository;

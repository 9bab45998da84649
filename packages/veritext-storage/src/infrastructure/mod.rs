//! Storage infrastructure
//!
//! In-memory adapters for the domain ports. SQL-backed adapters are out of
//! scope; deployments needing durability implement the ports themselves.

pub mod memory;

pub use memory::{InMemoryDocumentStore, InMemoryReportStore};

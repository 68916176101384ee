//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the member data access contract.
//! - Isolate SQLite statements from service and controller code.
//!
//! # Invariants
//! - Lookups return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Update and delete of a missing key are successful no-ops.

pub mod member_repo;

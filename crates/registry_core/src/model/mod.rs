//! Registry domain model.
//!
//! # Responsibility
//! - Define the member record shared by store, service and controller.
//!
//! # Invariants
//! - A constructed `Member` never carries a blank name or blank social
//!   security number.
//! - `id` is assigned by storage; `None` means not yet persisted.

pub mod member;

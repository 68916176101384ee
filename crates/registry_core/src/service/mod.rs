//! Core use-case services.
//!
//! # Responsibility
//! - Expose the member lifecycle API used by the interactive controller.
//! - Keep callers decoupled from storage details.

pub mod registry_service;

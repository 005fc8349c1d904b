//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. Parameter types carry
//! operation inputs from the controller layer down to the repositories.

pub mod author;
pub mod book;

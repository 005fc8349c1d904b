//! API data transfer objects.
//!
//! DTOs are the wire-level representations exchanged with clients. Domain models
//! are converted to DTOs at the controller boundary; incoming DTOs are converted
//! to parameter models before they reach the service layer.

pub mod api;
pub mod author;
pub mod book;
pub mod link;

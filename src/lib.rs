//! Library REST API.
//!
//! An axum + SeaORM backend exposing author and book resources, with a
//! generic resource-representation pipeline: client-driven sorting resolved
//! through per-shape property mappings, field selection and data shaping,
//! paging metadata, and hypermedia links under a vendor media type.

pub mod model;
pub mod server;

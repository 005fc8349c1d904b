//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the
//! application. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input
//!   validation, content negotiation, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between
//!   controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain
//!   model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific
//!   parameter types
//! - **Representation Layer** (`representation/`) - Sort-key mapping, field
//!   selection, data shaping, pagination metadata, and hypermedia links
//! - **Error Layer** (`error/`) - Application error types and HTTP response
//!   mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application
//!   configuration
//! - **State** (`state`) - Shared application state (DB, mapping registry,
//!   URI builder)
//! - **Startup** (`startup`) - Database connection, migrations, and seeding
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical collection request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the controller
//! 2. **Controller** validates `orderBy` against the mapping registry and
//!    `fields` against the shape, rejecting the request before any query runs
//! 3. **Service** resolves sort clauses and orchestrates the data operation
//! 4. **Data** queries the filtered, sorted page and converts entities to
//!    domain models
//! 5. **Controller** converts domain models to DTOs, shapes them to the
//!    requested fields, attaches links or pagination headers per the
//!    negotiated representation, and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod representation;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

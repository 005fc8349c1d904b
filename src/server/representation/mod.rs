//! Generic resource-representation pipeline.
//!
//! Turns raw query results into the representation a client asked for.
//! Sort keys are validated and resolved onto stored columns
//! (`property_mapping`), field selections are validated (`field_selection`)
//! and DTOs are projected down to them (`shaping`), result windows carry
//! paging metadata (`pagination`), and when the vendor media type is
//! negotiated (`media_type`) responses are decorated with hypermedia links
//! (`links`) rendered through the single URI seam (`uri`).
//!
//! Everything in this module is synchronous, side-effect-free and
//! request-scoped, except the property mapping registry, which is built once
//! at startup and read-only afterwards.

pub mod field_selection;
pub mod links;
pub mod media_type;
pub mod pagination;
pub mod property_mapping;
pub mod shaping;
pub mod uri;

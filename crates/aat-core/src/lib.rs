//! # aat-core
//!
//! Entity types exchanged with the algorithmic accountability analysis service.
//!
//! This crate holds the wire-level vocabulary shared by the client and the CLI:
//! - Entity structs for personas, analysis results, contracts and scrape jobs
//! - Enums for platforms, contract styles, export formats and job states
//! - A lenient timestamp serde adapter for backend-emitted date-times
//! - Cross-cutting error types
//!
//! Every type derives `JsonSchema` so the boundary contract can be inspected
//! and validated independently of the HTTP layer.

pub mod entities;
pub mod enums;
pub mod errors;
pub mod timestamp;

pub use entities::*;
pub use enums::{ContractFormat, ExportFormat, Platform, ScrapeStatus};
pub use errors::CoreError;

//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Request models and rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation (where the raw shape needs checking)
//! - `client.rs` — Sub-client with HTTP methods

pub mod embedded;
pub mod signature_request;
pub mod template;
pub mod unclaimed_draft;
